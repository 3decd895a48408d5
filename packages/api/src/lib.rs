//! # API crate — shared fullstack server functions for Unisearch
//!
//! Defines the Dioxus server functions the web frontend calls, plus the
//! models and validation rules shared by both sides of the wire.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Password hashing, session keys, account storage operations and their error type |
//! | [`db`] | — | PostgreSQL connection pool (lazy `OnceCell` singleton) and embedded migrations |
//! | [`models`] | — | `RegistrationInput`, `FieldErrors`, `User` and its client-safe projection `UserInfo` |
//! | [`settings`] | `server` | Layered server configuration (defaults, `config.toml`, environment) |
//! | [`validation`] | — | The registration validation schema, run by the form and by `register` |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is compiled twice: once with the
//! server logic (behind `#[cfg(feature = "server")]`) and once as a thin
//! client stub that forwards the call over HTTP.
//!
//! - `register` — create an account (does not sign the user in)
//! - `login_password` — sign in with email and password
//! - `get_current_user` — the signed-in user, if any
//! - `logout` — clear the session

use dioxus::prelude::*;

pub mod auth;
pub mod db;
pub mod models;
#[cfg(feature = "server")]
pub mod settings;
pub mod validation;

pub use models::{Field, FieldErrors, RegistrationInput, UserInfo};
pub use validation::{RegistrationSchema, ValidationSchema, MIN_PASSWORD_LENGTH};

#[cfg(feature = "server")]
fn server_error(error: auth::AuthError) -> ServerFnError {
    tracing::error!("{}", error);
    ServerFnError::new(error.to_string())
}

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    let data = auth::SessionData::load(&session).await.map_err(server_error)?;

    let Some(user_id) = data.user_id else {
        return Ok(None);
    };

    let pool = db::get_pool().await.map_err(server_error)?;
    let user = auth::find_user(pool, &user_id).await.map_err(server_error)?;

    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Register a new user. The client navigates to the login page afterwards.
#[cfg(feature = "server")]
#[post("/api/auth/register")]
pub async fn register(input: RegistrationInput) -> Result<UserInfo, ServerFnError> {
    let pool = db::get_pool().await.map_err(server_error)?;

    match auth::register_user(pool, input).await {
        Ok(user) => Ok(user.to_info()),
        // Expected rejections go back to the form without an error log.
        Err(e @ (auth::AuthError::EmailTaken | auth::AuthError::Invalid(_))) => {
            tracing::info!("Registration rejected: {}", e);
            Err(ServerFnError::new(e.to_string()))
        }
        Err(e) => Err(server_error(e)),
    }
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(input: RegistrationInput) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login-password", session: tower_sessions::Session)]
pub async fn login_password(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    let pool = db::get_pool().await.map_err(server_error)?;

    let user = match auth::login(pool, &email, &password).await {
        Ok(user) => user,
        Err(auth::AuthError::InvalidCredentials) => {
            return Err(ServerFnError::new(
                auth::AuthError::InvalidCredentials.to_string(),
            ));
        }
        Err(e) => return Err(server_error(e)),
    };

    auth::SessionData {
        user_id: Some(user.id.to_string()),
    }
    .store(&session)
    .await
    .map_err(server_error)?;

    tracing::info!(user_id = %user.id, "User logged in");
    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login-password")]
pub async fn login_password(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}
