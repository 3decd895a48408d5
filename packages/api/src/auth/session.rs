//! Session data types.

use serde::{Deserialize, Serialize};

/// Key for storing user ID in session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Session data stored in the session store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionData {
    pub user_id: Option<String>,
}

impl SessionData {
    /// Read the signed-in user's id from `session`, if any.
    pub async fn load(session: &tower_sessions::Session) -> Result<Self, super::AuthError> {
        let user_id = session
            .get::<String>(SESSION_USER_ID_KEY)
            .await
            .map_err(|e| super::AuthError::Session(e.to_string()))?;
        Ok(Self { user_id })
    }

    /// Persist the signed-in user's id into `session`.
    pub async fn store(&self, session: &tower_sessions::Session) -> Result<(), super::AuthError> {
        match &self.user_id {
            Some(id) => session
                .insert(SESSION_USER_ID_KEY, id.clone())
                .await
                .map_err(|e| super::AuthError::Session(e.to_string())),
            None => session
                .remove::<String>(SESSION_USER_ID_KEY)
                .await
                .map(|_| ())
                .map_err(|e| super::AuthError::Session(e.to_string())),
        }
    }
}
