use thiserror::Error;

use crate::models::FieldErrors;

/// Failures of the account operations.
///
/// The server functions forward the display text to the client, which shows
/// it verbatim in the form's error banner.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{0}")]
    Invalid(FieldErrors),

    #[error("Email already exists")]
    EmailTaken,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Session error: {0}")]
    Session(String),

    #[error("{0}")]
    PasswordHash(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Field;

    #[test]
    fn test_messages_shown_to_users() {
        assert_eq!(AuthError::EmailTaken.to_string(), "Email already exists");
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );

        let mut errors = FieldErrors::new();
        errors.add(Field::Name, "Name is required");
        assert_eq!(AuthError::Invalid(errors).to_string(), "Name is required");
    }
}
