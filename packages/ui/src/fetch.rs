//! Load state for views that fetch on mount and again whenever their
//! parameters change.
//!
//! `use_resource` keeps the previous value while a restarted fetch is in
//! flight, so views would keep showing stale rows. [`use_project_list`]
//! resets its [`Fetch`] to [`Fetch::Loading`] every time the page changes,
//! and the three states stay mutually exclusive.

use api::{Backend, Paginated, Project};
use dioxus::prelude::*;

use crate::lifetime::use_view_lifetime;

#[derive(Debug, Clone, PartialEq)]
pub enum Fetch<T> {
    Loading,
    Failed,
    Ready(T),
}

impl<T> Fetch<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Fetch::Loading)
    }
}

/// One page of `GET /projects`, re-fetched whenever `page` changes.
///
/// The backend is taken from context as `B`, so views pass
/// [`AppBackend`](crate::AppBackend).
pub fn use_project_list<B>(page: u32) -> Signal<Fetch<Paginated<Project>>>
where
    B: Backend + Clone + 'static,
{
    let backend = use_context::<B>();
    let lifetime = use_view_lifetime();
    let mut listing = use_signal(|| Fetch::Loading);

    let _loader = use_resource(use_reactive!(|(page,)| {
        let backend = backend.clone();
        let lifetime = lifetime.clone();
        // Runs when the fetch (re)starts, before the request is sent.
        if !listing.peek().is_loading() {
            listing.set(Fetch::Loading);
        }
        async move {
            let Some(result) = lifetime.guard(backend.list_projects(page)).await else {
                return;
            };
            match result {
                Ok(projects) => listing.set(Fetch::Ready(projects)),
                Err(e) => {
                    tracing::error!(page, "listing projects failed: {e}");
                    listing.set(Fetch::Failed);
                }
            }
        }
    }));

    listing
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use api::{Endpoint, MemoryBackend, User};

    use super::*;
    use crate::testing::settle;

    /// Hands the page signal of the mounted app to the test.
    #[derive(Clone, Default)]
    struct PageHandle(Rc<Cell<Option<Signal<u32>>>>);

    #[component]
    fn Listing(page: u32) -> Element {
        let listing = use_project_list::<MemoryBackend>(page);
        let view = match &*listing.read() {
            Fetch::Loading => rsx! { p { "carregando" } },
            Fetch::Failed => rsx! { p { "falhou" } },
            Fetch::Ready(projects) => rsx! {
                ul {
                    for project in projects.data.clone() {
                        li { key: "{project.id}", "{project.name}" }
                    }
                }
            },
        };
        view
    }

    fn app() -> Element {
        let page = use_signal(|| 1u32);
        let handle = use_context::<PageHandle>();
        use_hook(move || handle.0.set(Some(page)));
        rsx! { Listing { page: page() } }
    }

    fn mount(backend: &MemoryBackend) -> (VirtualDom, PageHandle) {
        let handle = PageHandle::default();
        let mut dom = VirtualDom::new(app)
            .with_root_context(backend.clone())
            .with_root_context(handle.clone());
        dom.rebuild_in_place();
        (dom, handle)
    }

    fn seeded() -> MemoryBackend {
        let backend = MemoryBackend::new().signed_in(User::new("Ana", "ana@example.com"));
        for n in 0..20 {
            backend.seed_project(&format!("Projeto {n}"), &[]);
        }
        backend
    }

    #[tokio::test]
    async fn test_first_page_loads() {
        let backend = seeded();
        let (mut dom, _) = mount(&backend);
        assert!(dioxus_ssr::render(&dom).contains("carregando"));

        settle(&mut dom).await;
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Projeto 0"));
        assert!(!html.contains("carregando"));
    }

    #[tokio::test]
    async fn test_page_change_shows_loading_until_answered() {
        let backend = seeded();
        let (mut dom, handle) = mount(&backend);
        settle(&mut dom).await;
        assert!(dioxus_ssr::render(&dom).contains("Projeto 0"));

        let release = backend.hold(Endpoint::ListProjects);
        let mut page = handle.0.get().unwrap();
        dom.in_runtime(|| page.set(2));
        settle(&mut dom).await;

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("carregando"));
        assert!(!html.contains("Projeto 0"));

        release.send(()).unwrap();
        settle(&mut dom).await;
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Projeto 19"));
        assert!(!html.contains("Projeto 0"));
        assert!(!html.contains("carregando"));
    }

    #[tokio::test]
    async fn test_failed_page_after_good_one() {
        let backend = seeded();
        let (mut dom, handle) = mount(&backend);
        settle(&mut dom).await;

        backend.fail(Endpoint::ListProjects);
        let mut page = handle.0.get().unwrap();
        dom.in_runtime(|| page.set(2));
        settle(&mut dom).await;

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("falhou"));
        assert!(!html.contains("Projeto"));
        assert_eq!(backend.calls(Endpoint::ListProjects), 2);
    }
}
