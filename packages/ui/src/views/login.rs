//! Email/password sign-in page.

use dioxus::prelude::*;

use crate::auth::{use_auth, AuthState};
use crate::components::{Alert, Button, ButtonVariant, Divider, TextField};
use crate::error::error_message;
use crate::registration::Destination;

#[component]
pub fn LoginView(on_navigate: EventHandler<Destination>) -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go straight to search
    use_effect(move || {
        if auth().is_authenticated() {
            on_navigate.call(Destination::Search);
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        spawn(async move {
            error.set(None);
            loading.set(true);
            match api::login_password(email(), password()).await {
                Ok(user) => {
                    tracing::info!(user_id = %user.id, "Signed in");
                    loading.set(false);
                    auth.set(AuthState::signed_in(user));
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(error_message(e)));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            div {
                class: "auth-card",

                h1 {
                    class: "page-title",
                    "Sign in"
                }

                if let Some(message) = error() {
                    Alert { message }
                }

                form {
                    onsubmit: handle_login,

                    TextField {
                        id: "login-email",
                        label: "Email",
                        input_type: "email",
                        value: email(),
                        required: true,
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    TextField {
                        id: "login-password",
                        label: "Password",
                        input_type: "password",
                        value: password(),
                        required: true,
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    Button {
                        variant: ButtonVariant::Contained,
                        submit: true,
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Login" }
                    }

                    Divider { "or" }

                    Button {
                        variant: ButtonVariant::Outlined,
                        disabled: loading(),
                        onclick: move |_| on_navigate.call(Destination::Register),
                        "Create an account"
                    }
                }
            }
        }
    }
}
