//! Account storage operations backing the auth server functions.

use sqlx::PgPool;
use uuid::Uuid;

use super::{hash_password_blocking, verify_password_blocking, AuthError};
use crate::models::{RegistrationInput, User};
use crate::validation::{RegistrationSchema, ValidationSchema};

/// Trim the name and lowercase the email before validation and storage.
fn normalize(input: RegistrationInput) -> RegistrationInput {
    RegistrationInput {
        name: input.name.trim().to_string(),
        email: input.email.trim().to_lowercase(),
        password: input.password,
        confirm_password: input.confirm_password,
    }
}

/// Validate `input` and create a new account.
pub async fn register_user(pool: &PgPool, input: RegistrationInput) -> Result<User, AuthError> {
    let input = normalize(input);
    RegistrationSchema::new()
        .check(&input)
        .map_err(AuthError::Invalid)?;

    let existing: Option<(i32,)> = sqlx::query_as("SELECT 1 FROM users WHERE email = $1")
        .bind(&input.email)
        .fetch_optional(pool)
        .await?;
    if existing.is_some() {
        return Err(AuthError::EmailTaken);
    }

    let password_hash = hash_password_blocking(input.password.clone()).await?;

    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (email, name, password_hash) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(&input.email)
    .bind(&input.name)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        // Lost a race with a concurrent registration for the same email.
        sqlx::Error::Database(ref db) if db.is_unique_violation() => AuthError::EmailTaken,
        other => AuthError::Database(other),
    })?;

    tracing::info!(user_id = %user.id, "Registered new user");
    Ok(user)
}

/// Check an email/password pair and return the matching user.
pub async fn login(pool: &PgPool, email: &str, password: &str) -> Result<User, AuthError> {
    let email = email.trim().to_lowercase();

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await?;

    let Some(user) = user else {
        return Err(AuthError::InvalidCredentials);
    };

    if !verify_password_blocking(password.to_string(), user.password_hash.clone()).await? {
        return Err(AuthError::InvalidCredentials);
    }

    Ok(user)
}

/// Look up a user by the id stored in the session.
pub async fn find_user(pool: &PgPool, user_id: &str) -> Result<Option<User>, AuthError> {
    let Ok(user_uuid) = Uuid::parse_str(user_id) else {
        tracing::warn!(user_id, "Session holds a malformed user id");
        return Ok(None);
    };

    let user = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}
