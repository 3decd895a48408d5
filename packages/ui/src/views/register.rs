//! Registration page: name, email, password and confirmation.

use api::RegistrationSchema;
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::{Alert, Button, ButtonVariant, Divider, TextField};
use crate::icons::{FaArrowRight, FaSpinner};
use crate::notification::use_toast;
use crate::registration::{use_registration, Destination, FormView, RegisterFlow, SubmitIcon};
use crate::Icon;

/// Registration form. Must be rendered below a
/// [`RegistrationProvider`](crate::RegistrationProvider), an
/// [`AuthProvider`](crate::AuthProvider) and a
/// [`ToastProvider`](crate::ToastProvider).
#[component]
pub fn RegisterView(on_navigate: EventHandler<Destination>) -> Element {
    let auth = use_auth();
    let mut registration = use_registration();
    let toasts = use_toast();
    let mut flow = use_signal(|| RegisterFlow::new(on_navigate, toasts));

    // Signed-in users have nothing to do here
    use_effect(move || {
        let authenticated = auth().is_authenticated();
        flow.write().on_auth_changed(authenticated);
    });

    use_effect(move || {
        let state = registration.state();
        flow.write().on_submission_changed(&state);
    });

    if auth().is_authenticated() {
        return rsx! {};
    }

    let state = registration.state();
    let FormView {
        banner,
        fields,
        submit_disabled,
        submit_icon: icon,
        login_disabled,
    } = flow.read().view(&state);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let state = registration.state();
        let submitted = flow.write().submit(&RegistrationSchema::new(), &state);
        if let Some(input) = submitted {
            registration.register(input);
        }
    };

    rsx! {
        div {
            class: "auth-page",

            div {
                class: "auth-card",

                h1 {
                    class: "page-title",
                    "Create Account"
                }

                if let Some(message) = banner {
                    Alert { message }
                }

                form {
                    onsubmit: handle_submit,
                    novalidate: true,

                    for field_view in fields {
                        TextField {
                            id: field_view.field.id().to_string(),
                            label: field_view.field.label().to_string(),
                            input_type: field_view.field.input_type().to_string(),
                            value: field_view.value,
                            error: field_view.error.unwrap_or_default(),
                            required: true,
                            oninput: move |evt: FormEvent| {
                                flow.write().set_field(&RegistrationSchema::new(), field_view.field, evt.value());
                            },
                        }
                    }

                    Button {
                        variant: ButtonVariant::Contained,
                        submit: true,
                        disabled: submit_disabled,
                        "Register"
                        {submit_icon(icon)}
                    }

                    Divider { "or" }

                    Button {
                        variant: ButtonVariant::Outlined,
                        disabled: login_disabled,
                        onclick: move |_| {
                            let state = registration.state();
                            flow.write().go_to_login(&state);
                        },
                        "Login"
                    }
                }
            }
        }
    }
}

fn submit_icon(icon: SubmitIcon) -> Element {
    match icon {
        SubmitIcon::Arrow => rsx! {
            Icon { icon: FaArrowRight, width: 14, height: 14, class: "ml-2" }
        },
        SubmitIcon::Spinner => rsx! {
            Icon { icon: FaSpinner, width: 14, height: 14, class: "ml-2 animate-spin" }
        },
    }
}
