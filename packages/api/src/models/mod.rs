//! Data models shared between the server functions and the UI.

mod registration;
mod user;

pub use registration::{Field, FieldErrors, RegistrationInput};
#[cfg(feature = "server")]
pub use user::User;
pub use user::UserInfo;
