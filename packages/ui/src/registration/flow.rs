//! Event handling for the registration form, independent of the renderer.
//!
//! The component forwards DOM events and provider state changes to
//! [`RegisterFlow`], then renders the [`FormView`] it returns.

use api::{Field, FieldErrors, RegistrationInput, ValidationSchema};
use dioxus::prelude::EventHandler;

use super::SubmissionState;
use crate::notification::{NotificationLevel, Notify};

pub const REGISTRATION_SUCCESS_MESSAGE: &str = "Registration successful!";

/// Router-neutral navigation targets used by the shared views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Search,
    Login,
    Register,
}

/// Something that can move the app to another page.
pub trait Navigate {
    fn navigate(&mut self, to: Destination);
}

impl Navigate for EventHandler<Destination> {
    fn navigate(&mut self, to: Destination) {
        self.call(to);
    }
}

/// Glyph shown at the end of the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitIcon {
    Arrow,
    Spinner,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub field: Field,
    pub value: String,
    pub error: Option<String>,
}

/// Everything the registration form renders for one state.
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub banner: Option<String>,
    pub fields: Vec<FieldView>,
    pub submit_disabled: bool,
    pub submit_icon: SubmitIcon,
    pub login_disabled: bool,
}

pub struct RegisterFlow<N, S> {
    navigator: N,
    notifier: S,
    input: RegistrationInput,
    errors: FieldErrors,
    attempted: bool,
    authenticated: bool,
    succeeded: bool,
}

impl<N: Navigate, S: Notify> RegisterFlow<N, S> {
    pub fn new(navigator: N, notifier: S) -> Self {
        Self {
            navigator,
            notifier,
            input: RegistrationInput::default(),
            errors: FieldErrors::new(),
            attempted: false,
            authenticated: false,
            succeeded: false,
        }
    }

    pub fn input(&self) -> &RegistrationInput {
        &self.input
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Store a field edit. Once a submit has been attempted, every edit
    /// re-validates so stale messages disappear as the user fixes them.
    pub fn set_field(&mut self, schema: &impl ValidationSchema, field: Field, value: String) {
        self.input.set(field, value);
        if self.attempted {
            self.errors = schema.validate(&self.input);
        }
    }

    /// Redirect guard. Sends a signed-in user to the search page once per
    /// transition into the authenticated state. Returns whether the form
    /// should stay hidden.
    pub fn on_auth_changed(&mut self, authenticated: bool) -> bool {
        if authenticated && !self.authenticated {
            tracing::info!("Already signed in, leaving the registration page");
            self.navigator.navigate(Destination::Search);
        }
        self.authenticated = authenticated;
        authenticated
    }

    /// Validate and hand back the input to register. Returns `None` when a
    /// request is in flight or validation failed; field errors are kept for
    /// display in the latter case.
    pub fn submit(
        &mut self,
        schema: &impl ValidationSchema,
        state: &SubmissionState,
    ) -> Option<RegistrationInput> {
        if state.is_loading() {
            return None;
        }
        self.attempted = true;
        self.errors = schema.validate(&self.input);
        if !self.errors.is_empty() {
            tracing::debug!(errors = self.errors.len(), "Registration form invalid");
            return None;
        }
        Some(self.input.clone())
    }

    /// React to a change of the provider's state. On the edge into
    /// `Succeeded` the user is notified and sent to the login page, once.
    pub fn on_submission_changed(&mut self, state: &SubmissionState) {
        let succeeded = state.is_succeeded();
        if succeeded && !self.succeeded {
            self.notifier
                .send_notification(REGISTRATION_SUCCESS_MESSAGE, NotificationLevel::Success);
            self.navigator.navigate(Destination::Login);
        }
        self.succeeded = succeeded;
    }

    /// The secondary "Login" button. Ignored while a request is in flight.
    pub fn go_to_login(&mut self, state: &SubmissionState) -> bool {
        if state.is_loading() {
            return false;
        }
        self.navigator.navigate(Destination::Login);
        true
    }

    pub fn view(&self, state: &SubmissionState) -> FormView {
        let loading = state.is_loading();
        FormView {
            banner: state.error().map(str::to_string),
            fields: Field::ALL
                .iter()
                .map(|&field| FieldView {
                    field,
                    value: self.input.get(field).to_string(),
                    error: self.errors.get(field).map(str::to_string),
                })
                .collect(),
            submit_disabled: loading,
            submit_icon: if loading {
                SubmitIcon::Spinner
            } else {
                SubmitIcon::Arrow
            },
            login_disabled: loading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{RegistrationSchema, UserInfo};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Recorder {
        navigations: Rc<RefCell<Vec<Destination>>>,
        notifications: Rc<RefCell<Vec<(String, NotificationLevel)>>>,
    }

    impl Navigate for Recorder {
        fn navigate(&mut self, to: Destination) {
            self.navigations.borrow_mut().push(to);
        }
    }

    impl Notify for Recorder {
        fn send_notification(&mut self, message: &str, level: NotificationLevel) {
            self.notifications
                .borrow_mut()
                .push((message.to_string(), level));
        }
    }

    fn flow() -> (RegisterFlow<Recorder, Recorder>, Recorder) {
        let recorder = Recorder::default();
        (RegisterFlow::new(recorder.clone(), recorder.clone()), recorder)
    }

    fn fill(flow: &mut RegisterFlow<Recorder, Recorder>, values: [&str; 4]) {
        let schema = RegistrationSchema::new();
        for (field, value) in Field::ALL.into_iter().zip(values) {
            flow.set_field(&schema, field, value.to_string());
        }
    }

    fn user() -> UserInfo {
        UserInfo {
            id: "7".to_string(),
            email: "ada@example.com".to_string(),
            name: Some("Ada".to_string()),
        }
    }

    #[test]
    fn test_empty_name_blocks_submission() {
        let (mut flow, _) = flow();
        fill(&mut flow, ["", "ada@example.com", "analytical", "analytical"]);

        let sent = flow.submit(&RegistrationSchema::new(), &SubmissionState::Idle);
        assert!(sent.is_none());

        let view = flow.view(&SubmissionState::Idle);
        assert_eq!(view.fields[0].field, Field::Name);
        assert_eq!(view.fields[0].error.as_deref(), Some("Name is required"));
    }

    #[test]
    fn test_mismatched_passwords_block_submission() {
        let (mut flow, _) = flow();
        fill(&mut flow, ["Ada", "ada@example.com", "analytical", "analytic"]);

        assert!(flow
            .submit(&RegistrationSchema::new(), &SubmissionState::Idle)
            .is_none());
        assert_eq!(
            flow.errors().get(Field::ConfirmPassword),
            Some("Passwords must match")
        );
    }

    #[test]
    fn test_valid_submission_returns_raw_values() {
        let (mut flow, _) = flow();
        fill(&mut flow, [" Ada ", "ada@example.com", "analytical", "analytical"]);

        let sent = flow
            .submit(&RegistrationSchema::new(), &SubmissionState::Idle)
            .unwrap();
        assert_eq!(sent.name, " Ada ");
        assert_eq!(sent.confirm_password, "analytical");
        assert!(flow.errors().is_empty());
    }

    #[test]
    fn test_submit_ignored_while_loading() {
        let (mut flow, _) = flow();
        fill(&mut flow, ["Ada", "ada@example.com", "analytical", "analytical"]);
        assert!(flow
            .submit(&RegistrationSchema::new(), &SubmissionState::Loading)
            .is_none());
    }

    #[test]
    fn test_errors_revalidate_on_edit_after_first_attempt() {
        let schema = RegistrationSchema::new();
        let (mut flow, _) = flow();

        // No errors before the first attempt, even for a bad value.
        flow.set_field(&schema, Field::Email, "nope".to_string());
        assert!(flow.errors().is_empty());

        flow.submit(&schema, &SubmissionState::Idle);
        assert!(flow.errors().contains(Field::Name));

        flow.set_field(&schema, Field::Name, "Ada".to_string());
        assert!(!flow.errors().contains(Field::Name));
        assert!(flow.errors().contains(Field::Email));
    }

    #[test]
    fn test_authenticated_at_mount_redirects_to_search_once() {
        let (mut flow, recorder) = flow();
        assert!(flow.on_auth_changed(true));
        assert!(flow.on_auth_changed(true));
        assert_eq!(*recorder.navigations.borrow(), vec![Destination::Search]);
    }

    #[test]
    fn test_anonymous_user_stays_on_the_form() {
        let (mut flow, recorder) = flow();
        assert!(!flow.on_auth_changed(false));
        assert!(recorder.navigations.borrow().is_empty());

        // Signing in later still triggers the guard.
        assert!(flow.on_auth_changed(true));
        assert_eq!(*recorder.navigations.borrow(), vec![Destination::Search]);
    }

    #[test]
    fn test_error_banner_shows_exact_message() {
        let (flow, _) = flow();
        let view = flow.view(&SubmissionState::Failed("Email already exists".to_string()));
        assert_eq!(view.banner.as_deref(), Some("Email already exists"));
        assert!(!view.submit_disabled);
        assert!(!view.login_disabled);
    }

    #[test]
    fn test_success_notifies_and_navigates_exactly_once() {
        let (mut flow, recorder) = flow();
        flow.on_submission_changed(&SubmissionState::Loading);
        let done = SubmissionState::Succeeded(user());
        flow.on_submission_changed(&done);
        flow.on_submission_changed(&done);

        assert_eq!(
            *recorder.notifications.borrow(),
            vec![(
                REGISTRATION_SUCCESS_MESSAGE.to_string(),
                NotificationLevel::Success
            )]
        );
        assert_eq!(*recorder.navigations.borrow(), vec![Destination::Login]);
    }

    #[test]
    fn test_failure_does_not_navigate() {
        let (mut flow, recorder) = flow();
        flow.on_submission_changed(&SubmissionState::Loading);
        flow.on_submission_changed(&SubmissionState::Failed("boom".to_string()));
        assert!(recorder.navigations.borrow().is_empty());
        assert!(recorder.notifications.borrow().is_empty());
    }

    #[test]
    fn test_loading_disables_both_buttons_and_shows_spinner() {
        let (flow, _) = flow();
        let view = flow.view(&SubmissionState::Loading);
        assert!(view.submit_disabled);
        assert!(view.login_disabled);
        assert_eq!(view.submit_icon, SubmitIcon::Spinner);
        assert!(view.banner.is_none());

        let idle = flow.view(&SubmissionState::Idle);
        assert_eq!(idle.submit_icon, SubmitIcon::Arrow);
    }

    #[test]
    fn test_login_button_ignored_while_loading() {
        let (mut flow, recorder) = flow();
        assert!(!flow.go_to_login(&SubmissionState::Loading));
        assert!(recorder.navigations.borrow().is_empty());

        assert!(flow.go_to_login(&SubmissionState::Failed("x".to_string())));
        assert_eq!(*recorder.navigations.borrow(), vec![Destination::Login]);
    }
}
