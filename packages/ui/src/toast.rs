use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use dioxus::prelude::*;

/// How long a toast stays up unless dismissed.
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn alert_class(self) -> &'static str {
        match self {
            ToastKind::Success => "alert alert-success",
            ToastKind::Error => "alert alert-error",
        }
    }
}

/// A transient notification. Each toast gets a fresh id so a newer toast is
/// never cleared by the timer of an older one.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            id: NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed),
            kind,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Renders the toast in `toast` and clears it after [`TOAST_DURATION`] or
/// when the ✕ button is clicked.
#[component]
pub fn ToastView(toast: Signal<Option<Toast>>) -> Element {
    let mut toast = toast;
    use_effect(move || {
        let Some(shown) = toast() else {
            return;
        };
        spawn(async move {
            sleep(TOAST_DURATION).await;
            if toast.peek().as_ref().map(|t| t.id) == Some(shown.id) {
                toast.set(None);
            }
        });
    });

    let Some(current) = toast() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "toast toast-top toast-end z-50",
            div {
                class: "{current.kind.alert_class()}",
                role: "alert",
                span { "{current.message}" }
                button {
                    class: "btn btn-ghost btn-xs",
                    r#type: "button",
                    aria_label: "Fechar",
                    onclick: move |_| toast.set(None),
                    "✕"
                }
            }
        }
    }
}
