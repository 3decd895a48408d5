//! User-facing notifications, delivered as toasts.

pub use dioxus_primitives::toast::{use_toast, ToastOptions, ToastProvider, Toasts};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// Sink for user-facing notifications.
pub trait Notify {
    fn send_notification(&mut self, message: &str, level: NotificationLevel);
}

impl Notify for Toasts {
    fn send_notification(&mut self, message: &str, level: NotificationLevel) {
        match level {
            NotificationLevel::Success => self.success(message.to_string(), ToastOptions::new()),
            NotificationLevel::Error => self.error(message.to_string(), ToastOptions::new()),
        }
    }
}
