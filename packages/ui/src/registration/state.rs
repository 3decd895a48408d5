use api::UserInfo;

/// Lifecycle of one registration request, owned by the registration provider.
///
/// `Failed` behaves like `Idle` for the purpose of starting another attempt.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Loading,
    Succeeded(UserInfo),
    Failed(String),
}

impl SubmissionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionState::Loading)
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, SubmissionState::Succeeded(_))
    }

    /// The registered user, once the call succeeded.
    pub fn user(&self) -> Option<&UserInfo> {
        match self {
            SubmissionState::Succeeded(user) => Some(user),
            _ => None,
        }
    }

    /// The failure message, if the last attempt failed with a non-empty one.
    pub fn error(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(message) if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }

    /// Move to `Loading`. Returns false, leaving the state untouched, when a
    /// request is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_loading() {
            tracing::warn!("Registration already in flight, ignoring new submission");
            return false;
        }
        *self = SubmissionState::Loading;
        true
    }

    /// Record the outcome of the in-flight request. Ignored unless loading.
    pub fn settle(&mut self, outcome: Result<UserInfo, String>) {
        if !self.is_loading() {
            tracing::warn!("Registration outcome arrived with no request in flight");
            return;
        }
        *self = match outcome {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "Registration succeeded");
                SubmissionState::Succeeded(user)
            }
            Err(message) => {
                tracing::info!(%message, "Registration failed");
                SubmissionState::Failed(message)
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserInfo {
        UserInfo {
            id: "42".to_string(),
            email: "ada@example.com".to_string(),
            name: Some("Ada".to_string()),
        }
    }

    #[test]
    fn test_idle_to_loading_to_succeeded() {
        let mut state = SubmissionState::default();
        assert_eq!(state, SubmissionState::Idle);
        assert!(state.begin());
        assert!(state.is_loading());
        state.settle(Ok(user()));
        assert_eq!(state.user(), Some(&user()));
        assert!(state.error().is_none());
    }

    #[test]
    fn test_failed_allows_retry_and_clears_error() {
        let mut state = SubmissionState::Loading;
        state.settle(Err("Email already exists".to_string()));
        assert_eq!(state.error(), Some("Email already exists"));

        assert!(state.begin());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_begin_while_loading_is_refused() {
        let mut state = SubmissionState::Loading;
        assert!(!state.begin());
        assert!(state.is_loading());
    }

    #[test]
    fn test_settle_without_request_is_ignored() {
        let mut state = SubmissionState::Idle;
        state.settle(Ok(user()));
        assert_eq!(state, SubmissionState::Idle);
    }

    #[test]
    fn test_empty_failure_message_is_not_an_error() {
        let state = SubmissionState::Failed(String::new());
        assert!(state.error().is_none());
    }
}
