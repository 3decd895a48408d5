//! Email + password authentication: password hashing, session keys and the
//! account operations behind the auth server functions.

#[cfg(feature = "server")]
mod accounts;
#[cfg(feature = "server")]
mod error;
#[cfg(feature = "server")]
mod password;
#[cfg(feature = "server")]
mod session;

#[cfg(feature = "server")]
pub use accounts::{find_user, login, register_user};
#[cfg(feature = "server")]
pub use error::AuthError;
#[cfg(feature = "server")]
pub use password::{
    hash_password, hash_password_blocking, verify_password, verify_password_blocking,
};
#[cfg(feature = "server")]
pub use session::{SessionData, SESSION_USER_ID_KEY};
