//! Authentication context and hooks for the UI.

use api::UserInfo;
use dioxus::prelude::*;

use crate::registration::Destination;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// True once the session check finished and found a user.
    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.user.is_some()
    }

    /// True once the session check finished without a user.
    pub fn is_signed_out(&self) -> bool {
        !self.loading && self.user.is_none()
    }

    pub fn signed_in(user: UserInfo) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Fetch the current user on mount
    let _ = use_resource(move || async move {
        match api::get_current_user().await {
            Ok(Some(user)) => auth_state.set(AuthState::signed_in(user)),
            Ok(None) => auth_state.set(AuthState::signed_out()),
            Err(e) => {
                tracing::warn!("Failed to fetch current user: {}", e);
                auth_state.set(AuthState::signed_out());
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    on_navigate: EventHandler<Destination>,
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();

    let onclick = move |_| async move {
        match api::logout().await {
            Ok(()) => {
                auth_state.set(AuthState::signed_out());
                on_navigate.call(Destination::Login);
            }
            Err(e) => tracing::error!("Failed to log out: {}", e),
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserInfo {
        UserInfo {
            id: "1".to_string(),
            email: "ada@example.com".to_string(),
            name: None,
        }
    }

    #[test]
    fn test_not_authenticated_while_loading() {
        let state = AuthState {
            user: Some(user()),
            loading: true,
        };
        assert!(!state.is_authenticated());
        assert!(!AuthState::default().is_authenticated());
    }

    #[test]
    fn test_signed_in_and_out() {
        assert!(AuthState::signed_in(user()).is_authenticated());
        assert!(!AuthState::signed_out().is_authenticated());
    }

    #[test]
    fn test_signed_out_only_after_session_check() {
        assert!(!AuthState::default().is_signed_out());
        assert!(AuthState::signed_out().is_signed_out());
        assert!(!AuthState::signed_in(user()).is_signed_out());
    }
}
