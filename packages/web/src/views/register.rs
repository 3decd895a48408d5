//! Registration page.

use dioxus::prelude::*;
use ui::views::RegisterView;
use ui::{Destination, RegistrationProvider};

use super::navigate_to;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let nav = use_navigator();

    rsx! {
        RegistrationProvider {
            RegisterView {
                on_navigate: move |to: Destination| navigate_to(nav, to),
            }
        }
    }
}
