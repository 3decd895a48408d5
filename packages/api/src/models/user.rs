//! # User model for registered accounts
//!
//! ## [`User`] (server only)
//!
//! The database row from the `users` table, loaded with [`sqlx::FromRow`]:
//! `id`, `email` (stored lowercased), `name`, the Argon2 `password_hash`
//! and audit timestamps. [`User::to_info`] projects it into a [`UserInfo`].
//!
//! ## [`UserInfo`]
//!
//! The client-safe subset that crosses the server/client boundary. It omits
//! the password hash and timestamps and carries the id as a `String` so it
//! works in WASM.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            name: Some(self.name.clone()).filter(|n| !n.is_empty()),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut info = UserInfo {
            id: "1".to_string(),
            email: "ada@example.com".to_string(),
            name: None,
        };
        assert_eq!(info.display_name(), "ada@example.com");
        info.name = Some("Ada".to_string());
        assert_eq!(info.display_name(), "Ada");
    }
}
