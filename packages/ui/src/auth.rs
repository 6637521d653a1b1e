//! Session state and the components that expose it.
//!
//! [`SessionStore`] is the single source of truth for "who is signed in". It
//! hands out immutable [`Session`] snapshots and notifies subscribers on every
//! change. [`AuthProvider`] owns the store for the lifetime of the app, runs
//! the initial session probe and mirrors snapshots into a `Signal<Session>`
//! so components re-render when the session changes.

use std::cell::RefCell;
use std::rc::Rc;

use api::{ApiError, Backend, Credentials, User};
use dioxus::prelude::*;

use crate::backend::use_backend;

/// Snapshot of the authentication state.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    /// `true` until the initial probe has resolved. Do not branch on
    /// [`is_authenticated`](Session::is_authenticated) while this is set.
    pub loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl Session {
    /// A session whose probe has finished.
    pub fn resolved(user: Option<User>) -> Self {
        Self {
            user,
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

type Listener = Rc<dyn Fn(&Session)>;

#[derive(Default)]
struct StoreInner {
    snapshot: Session,
    listeners: Vec<(u64, Listener)>,
    next_id: u64,
}

/// Observable session holder. Clones share the same state.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Session {
        self.inner.borrow().snapshot.clone()
    }

    /// Call `listener` with every new snapshot until unsubscribed.
    pub fn subscribe(&self, listener: impl Fn(&Session) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.listeners.push((id, Rc::new(listener)));
        Subscription(id)
    }

    pub fn unsubscribe(&self, subscription: Subscription) {
        self.inner
            .borrow_mut()
            .listeners
            .retain(|(id, _)| *id != subscription.0);
    }

    fn replace(&self, next: Session) {
        // Listeners run outside the borrow so they may read the store.
        let listeners: Vec<Listener> = {
            let mut inner = self.inner.borrow_mut();
            inner.snapshot = next.clone();
            inner.listeners.iter().map(|(_, l)| l.clone()).collect()
        };
        for listener in listeners {
            listener(&next);
        }
    }

    /// Ask the backend who the session cookie belongs to.
    ///
    /// Any failure resolves to a signed-out session; this never errors.
    pub async fn probe<B: Backend>(&self, backend: &B) {
        let user = match backend.current_user().await {
            Ok(user) => {
                tracing::debug!(email = %user.email, "session probe: signed in");
                Some(user)
            }
            Err(ApiError::Unauthenticated) => {
                tracing::debug!("session probe: anonymous");
                None
            }
            Err(e) => {
                tracing::warn!("session probe failed, treating as signed out: {e}");
                None
            }
        };
        self.replace(Session::resolved(user));
    }

    /// Record a user the caller has already authenticated server-side.
    pub fn login(&self, user: User) {
        tracing::info!(email = %user.email, "signed in");
        self.replace(Session::resolved(Some(user)));
    }

    /// Full login handshake: CSRF cookie, credentials, then the identity
    /// the server now associates with the session cookie.
    pub async fn sign_in<B: Backend>(
        &self,
        backend: &B,
        credentials: &Credentials,
    ) -> Result<User, ApiError> {
        backend.fetch_csrf_cookie().await?;
        backend.login(credentials).await?;
        let user = backend.current_user().await?;
        self.login(user.clone());
        Ok(user)
    }

    /// Destroy the remote session (best effort), then always clear the local one.
    pub async fn logout<B: Backend>(&self, backend: &B) {
        if let Err(e) = backend.logout().await {
            tracing::warn!("remote logout failed, clearing local session anyway: {e}");
        }
        self.replace(Session::resolved(None));
        tracing::info!("signed out");
    }
}

/// Current session; re-renders the caller when it changes.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// The store behind [`use_session`], for login/logout.
pub fn use_session_store() -> SessionStore {
    use_context::<SessionStore>()
}

/// Provider component that manages authentication state.
/// Wrap the router with this component.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let backend = use_backend();
    let store = use_context_provider(SessionStore::new);
    let session = use_context_provider(|| Signal::new(store.snapshot()));

    let subscription = use_hook({
        let store = store.clone();
        move || {
            store.subscribe(move |snapshot| {
                let mut session = session;
                session.set(snapshot.clone());
            })
        }
    });
    use_drop({
        let store = store.clone();
        move || store.unsubscribe(subscription)
    });

    // Probe the session once on mount.
    let _ = use_resource(move || {
        let store = store.clone();
        let backend = backend.clone();
        async move { store.probe(&backend).await }
    });

    rsx! {
        {children}
    }
}

/// Button that signs the user out.
#[component]
pub fn LogoutButton(
    #[props(default = "Sair".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logged_out: EventHandler<()>,
) -> Element {
    let store = use_session_store();
    let backend = use_backend();
    let mut pending = use_signal(|| false);

    let onclick = move |_| {
        let store = store.clone();
        let backend = backend.clone();
        async move {
            pending.set(true);
            store.logout(&backend).await;
            pending.set(false);
            on_logged_out.call(());
        }
    };

    rsx! {
        button {
            class: "{class}",
            disabled: pending(),
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{Endpoint, MemoryBackend};

    fn ana() -> User {
        User::new("Ana", "ana@example.com")
    }

    #[test]
    fn test_session_starts_loading() {
        let store = SessionStore::new();
        let session = store.snapshot();
        assert!(session.loading);
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_probe_with_valid_cookie() {
        let store = SessionStore::new();
        store.probe(&MemoryBackend::new().signed_in(ana())).await;

        let session = store.snapshot();
        assert!(!session.loading);
        assert!(session.is_authenticated());
        assert_eq!(session.user, Some(ana()));
    }

    #[tokio::test]
    async fn test_probe_failures_resolve_to_signed_out() {
        let anonymous = SessionStore::new();
        anonymous.probe(&MemoryBackend::new()).await;
        assert_eq!(anonymous.snapshot(), Session::resolved(None));

        let backend = MemoryBackend::new().signed_in(ana());
        backend.fail(Endpoint::CurrentUser);
        let offline = SessionStore::new();
        offline.probe(&backend).await;
        let session = offline.snapshot();
        assert!(!session.loading);
        assert_eq!(session.is_authenticated(), session.user.is_some());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_login_is_local() {
        let store = SessionStore::new();
        store.login(ana());
        assert_eq!(store.snapshot(), Session::resolved(Some(ana())));
    }

    #[tokio::test]
    async fn test_sign_in_handshake() {
        let backend = MemoryBackend::new().with_account(ana(), "secret");
        let store = SessionStore::new();
        store.probe(&backend).await;
        assert!(!store.snapshot().is_authenticated());

        let user = store
            .sign_in(&backend, &Credentials::new("ana@example.com", "secret"))
            .await
            .unwrap();
        assert_eq!(user, ana());
        assert_eq!(store.snapshot(), Session::resolved(Some(ana())));
        assert_eq!(backend.calls(Endpoint::CsrfCookie), 1);
    }

    #[tokio::test]
    async fn test_sign_in_failure_leaves_session_alone() {
        let backend = MemoryBackend::new().with_account(ana(), "secret");
        let store = SessionStore::new();
        store.probe(&backend).await;

        let result = store
            .sign_in(&backend, &Credentials::new("ana@example.com", "errada"))
            .await;
        assert!(matches!(result, Err(ApiError::Validation { .. })));
        assert_eq!(store.snapshot(), Session::resolved(None));
        assert_eq!(backend.calls(Endpoint::CurrentUser), 1);
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let backend = MemoryBackend::new().signed_in(ana());
        let store = SessionStore::new();
        store.probe(&backend).await;
        store.logout(&backend).await;

        assert_eq!(store.snapshot().user, None);
        assert_eq!(backend.calls(Endpoint::Logout), 1);
    }

    #[tokio::test]
    async fn test_logout_clears_session_when_remote_fails() {
        let backend = MemoryBackend::new().signed_in(ana());
        let store = SessionStore::new();
        store.probe(&backend).await;
        assert!(store.snapshot().is_authenticated());

        backend.fail(Endpoint::Logout);
        store.logout(&backend).await;

        assert_eq!(store.snapshot().user, None);
        assert!(!store.snapshot().loading);
    }

    #[test]
    fn test_subscribers_see_every_snapshot() {
        let store = SessionStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let subscription = store.subscribe({
            let seen = seen.clone();
            move |session: &Session| seen.borrow_mut().push(session.is_authenticated())
        });

        store.login(ana());
        store.replace(Session::resolved(None));
        store.unsubscribe(subscription);
        store.login(ana());

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn test_listener_may_read_store() {
        let store = SessionStore::new();
        let observed = Rc::new(RefCell::new(None));
        store.subscribe({
            let store = store.clone();
            let observed = observed.clone();
            move |_: &Session| *observed.borrow_mut() = Some(store.snapshot())
        });
        store.login(ana());
        assert_eq!(*observed.borrow(), Some(Session::resolved(Some(ana()))));
    }
}
