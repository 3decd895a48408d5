//! Login page.

use dioxus::prelude::*;
use ui::views::LoginView;
use ui::Destination;

use super::navigate_to;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    rsx! {
        LoginView {
            on_navigate: move |to: Destination| navigate_to(nav, to),
        }
    }
}
