//! Account registration: the provider that owns the request state and the
//! renderer-independent form flow.

mod flow;
mod provider;
mod state;

pub use flow::{
    Destination, FieldView, FormView, Navigate, RegisterFlow, SubmitIcon,
    REGISTRATION_SUCCESS_MESSAGE,
};
pub use provider::{use_registration, Registration, RegistrationProvider};
pub use state::SubmissionState;
