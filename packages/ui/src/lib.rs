//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

mod error;
pub use error::error_message;

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

pub mod notification;
pub use notification::{use_toast, NotificationLevel, Notify, ToastOptions, ToastProvider};

pub mod registration;
pub use registration::{
    use_registration, Destination, Navigate, Registration, RegistrationProvider, SubmissionState,
};
