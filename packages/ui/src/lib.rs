//! This crate contains all shared UI state and components for the workspace.

mod backend;
pub use backend::{make_backend, use_backend, AppBackend};

mod auth;
pub use auth::{
    use_session, use_session_store, AuthProvider, LogoutButton, Session, SessionStore,
    Subscription,
};

mod guard;
pub use guard::{GuardDecision, Guarded};

pub mod toggle;
pub use toggle::{toggle_task, PendingToggle, ToggleOutcome};

pub mod pager;
pub use pager::{TaskPager, TASKS_PER_PAGE};

mod flash;
pub use flash::{use_flash, use_flash_toast, Flash, FlashBox};

mod toast;
pub use toast::{Toast, ToastKind, ToastView, TOAST_DURATION};

pub mod lifetime;
pub use lifetime::{use_view_lifetime, ViewLifetime};

mod fetch;
pub use fetch::{use_project_list, Fetch};

pub mod create;
pub use create::{create_project, create_task, FormState};

mod pagination;
pub use pagination::{link_label, Pagination};

pub mod format;
pub use format::{format_datetime, format_percent};

mod components;
pub use components::{DifficultyBadge, ErrorBanner, FullScreenSpinner, ProgressBar, Spinner};

#[cfg(test)]
mod testing;
