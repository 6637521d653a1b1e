use dioxus::prelude::*;

use ui::Guarded;

use crate::Route;

/// Layout for every signed-in page.
///
/// Waits for the session probe, then either renders the nested routes or
/// replaces the current history entry with `/login`.
#[component]
pub fn AuthGuard() -> Element {
    let nav = use_navigator();

    rsx! {
        Guarded {
            on_redirect: move |_| {
                nav.replace(Route::Login {});
            },
            Outlet::<Route> {}
        }
    }
}
