use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};
use crate::registration::Destination;

/// Landing page for signed-in users.
#[component]
pub fn SearchView(on_navigate: EventHandler<Destination>) -> Element {
    let auth = use_auth();

    // Signed-out visitors belong on the login page
    use_effect(move || {
        if auth().is_signed_out() {
            on_navigate.call(Destination::Login);
        }
    });

    let Some(user) = auth().user else {
        return rsx! {};
    };
    let name = user.display_name().to_string();

    rsx! {
        div {
            class: "auth-page",
            h1 {
                class: "page-title",
                "Welcome, {name}"
            }
            p {
                class: "page-subtitle",
                "University search is coming soon."
            }
            LogoutButton { on_navigate, class: "btn btn--outlined" }
        }
    }
}
