use dioxus::prelude::ServerFnError;

/// The text to show a user for a failed server call.
///
/// Errors raised by the server carry their message as-is; transport and
/// decoding failures fall back to their full description.
pub fn error_message(error: ServerFnError) -> String {
    match error {
        ServerFnError::ServerError { message, .. } => message,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::SubmissionState;

    #[test]
    fn test_server_message_is_shown_verbatim() {
        let message = error_message(ServerFnError::new("Email already exists"));
        assert_eq!(message, "Email already exists");
    }

    #[test]
    fn test_failed_registration_banner_text() {
        let mut state = SubmissionState::Loading;
        state.settle(Err(ServerFnError::new("Email already exists")).map_err(error_message));
        assert_eq!(state.error(), Some("Email already exists"));
    }
}
