use dioxus::router::Navigator;
use ui::Destination;

use crate::Route;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod search;
pub use search::Search;

/// Map a shared-UI destination onto the router. The search page replaces
/// the current entry so "back" does not return to an auth form.
pub(crate) fn navigate_to(nav: Navigator, to: Destination) {
    let route = match to {
        Destination::Search => Route::Search {},
        Destination::Login => Route::Login {},
        Destination::Register => Route::Register {},
    };
    if to == Destination::Search {
        nav.replace(route);
    } else {
        nav.push(route);
    }
}
