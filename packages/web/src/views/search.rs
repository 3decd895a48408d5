use dioxus::prelude::*;
use ui::views::SearchView;
use ui::Destination;

use super::navigate_to;

#[component]
pub fn Search() -> Element {
    let nav = use_navigator();

    rsx! {
        SearchView {
            on_navigate: move |to: Destination| navigate_to(nav, to),
        }
    }
}
