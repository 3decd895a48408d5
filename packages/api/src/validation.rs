//! # Registration validation schema
//!
//! The same rules run in the browser before a submission and on the server
//! before a user is stored, so a request that passes the client check only
//! fails server-side when it was tampered with.
//!
//! Each field reports at most one message: the first rule it fails.
//!
//! | Field | Rule | Message |
//! |-------|------|---------|
//! | name | non-blank | `Name is required` |
//! | email | non-blank | `Email is required` |
//! | email | `local@domain.tld` | `Email must be a valid email` |
//! | password | non-empty | `Password is required` |
//! | password | length ≥ [`MIN_PASSWORD_LENGTH`] | `Password must be at least 8 characters` |
//! | confirm | non-empty | `Please confirm your password` |
//! | confirm | equals password | `Passwords must match` |

use crate::models::{Field, FieldErrors, RegistrationInput};

/// Minimum number of characters accepted for a password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maps a [`RegistrationInput`] to per-field error messages.
pub trait ValidationSchema {
    fn validate(&self, input: &RegistrationInput) -> FieldErrors;

    /// `Ok` when [`validate`](Self::validate) reports nothing.
    fn check(&self, input: &RegistrationInput) -> Result<(), FieldErrors> {
        let errors = self.validate(input);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Rules for the account registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationSchema {
    min_password_length: usize,
}

impl Default for RegistrationSchema {
    fn default() -> Self {
        Self {
            min_password_length: MIN_PASSWORD_LENGTH,
        }
    }
}

impl RegistrationSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to override the minimum password length.
    pub fn with_min_password_length(mut self, len: usize) -> Self {
        self.min_password_length = len;
        self
    }
}

impl ValidationSchema for RegistrationSchema {
    fn validate(&self, input: &RegistrationInput) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if input.name.trim().is_empty() {
            errors.add(Field::Name, "Name is required");
        }

        let email = input.email.trim();
        if email.is_empty() {
            errors.add(Field::Email, "Email is required");
        } else if !is_valid_email(email) {
            errors.add(Field::Email, "Email must be a valid email");
        }

        if input.password.is_empty() {
            errors.add(Field::Password, "Password is required");
        } else if input.password.chars().count() < self.min_password_length {
            errors.add(
                Field::Password,
                format!(
                    "Password must be at least {} characters",
                    self.min_password_length
                ),
            );
        }

        if input.confirm_password.is_empty() {
            errors.add(Field::ConfirmPassword, "Please confirm your password");
        } else if input.confirm_password != input.password {
            errors.add(Field::ConfirmPassword, "Passwords must match");
        }

        errors
    }
}

/// Loose structural check: one `@`, non-empty local part, dotted domain,
/// no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty() && !domain.starts_with('.'),
        None => false,
    }
}
