use dioxus::prelude::*;

use crate::auth::{use_session, Session};
use crate::components::FullScreenSpinner;

/// What a guarded route should do for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Probe still running: show a placeholder, do not navigate.
    Pending,
    /// Resolved and anonymous: replace the history entry with the login page.
    RedirectToLogin,
    /// Resolved and signed in: render the nested routes.
    Render,
}

impl GuardDecision {
    pub fn for_session(session: &Session) -> Self {
        if session.loading {
            Self::Pending
        } else if session.is_authenticated() {
            Self::Render
        } else {
            Self::RedirectToLogin
        }
    }
}

/// Renders `children` only for a signed-in session.
///
/// While the probe runs a full-screen spinner is shown. An anonymous session
/// renders nothing and fires `on_redirect` once resolved.
#[component]
pub fn Guarded(on_redirect: EventHandler<()>, children: Element) -> Element {
    let session = use_session();

    use_effect(move || {
        if GuardDecision::for_session(&session()) == GuardDecision::RedirectToLogin {
            tracing::debug!("anonymous visitor, redirecting to login");
            on_redirect.call(());
        }
    });

    match GuardDecision::for_session(&session()) {
        GuardDecision::Pending => rsx! { FullScreenSpinner {} },
        GuardDecision::RedirectToLogin => rsx! {},
        GuardDecision::Render => children,
    }
}
