use api::RegistrationInput;
use dioxus::prelude::*;

use super::SubmissionState;
use crate::error::error_message;

/// Handle to the registration request state, shared through the context.
#[derive(Clone, Copy, PartialEq)]
pub struct Registration {
    state: Signal<SubmissionState>,
}

impl Registration {
    pub fn state(&self) -> SubmissionState {
        self.state.read().clone()
    }

    /// Fire-and-forget registration. The outcome is published through
    /// [`state`](Self::state); a call while a request is in flight is ignored.
    pub fn register(&mut self, input: RegistrationInput) {
        if !self.state.write().begin() {
            return;
        }
        tracing::info!("Submitting registration");

        let mut state = self.state;
        spawn(async move {
            let outcome = api::register(input).await.map_err(error_message);
            state.write().settle(outcome);
        });
    }
}

pub fn use_registration() -> Registration {
    use_context::<Registration>()
}

/// Owns the registration request state for the pages below it.
#[component]
pub fn RegistrationProvider(children: Element) -> Element {
    let state = use_signal(SubmissionState::default);
    use_context_provider(|| Registration { state });

    rsx! {
        {children}
    }
}
