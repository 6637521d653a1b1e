//! Fetches that stop mattering when their view goes away.
//!
//! A view creates one [`ViewLifetime`] with [`use_view_lifetime`] and runs
//! every backend call through [`ViewLifetime::guard`]. When the view is
//! dropped all outstanding calls are aborted, and a call that completes
//! after that yields `None`, so no signal of a disposed view is written.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use dioxus::prelude::*;
use futures::future::{AbortHandle, Abortable};

#[derive(Default)]
struct Inner {
    ended: bool,
    next_id: u64,
    in_flight: HashMap<u64, AbortHandle>,
}

#[derive(Clone, Default)]
pub struct ViewLifetime {
    inner: Rc<RefCell<Inner>>,
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `fut` unless the view ends first. `None` means the result must be
    /// discarded.
    pub async fn guard<F: Future>(&self, fut: F) -> Option<F::Output> {
        let (handle, registration) = AbortHandle::new_pair();
        let id = {
            let mut inner = self.inner.borrow_mut();
            if inner.ended {
                return None;
            }
            inner.next_id += 1;
            let id = inner.next_id;
            inner.in_flight.insert(id, handle);
            id
        };

        let result = Abortable::new(fut, registration).await.ok();

        let mut inner = self.inner.borrow_mut();
        inner.in_flight.remove(&id);
        if inner.ended {
            None
        } else {
            result
        }
    }

    /// Abort everything in flight and refuse new work.
    pub fn end(&self) {
        let handles: Vec<AbortHandle> = {
            let mut inner = self.inner.borrow_mut();
            inner.ended = true;
            inner.in_flight.drain().map(|(_, handle)| handle).collect()
        };
        if !handles.is_empty() {
            tracing::debug!(count = handles.len(), "view dropped, aborting fetches");
        }
        for handle in handles {
            handle.abort();
        }
    }
}

/// A [`ViewLifetime`] that ends when the calling component is dropped.
pub fn use_view_lifetime() -> ViewLifetime {
    let lifetime = use_hook(ViewLifetime::new);
    use_drop({
        let lifetime = lifetime.clone();
        move || lifetime.end()
    });
    lifetime
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_live_view_gets_result() {
        let lifetime = ViewLifetime::new();
        assert_eq!(lifetime.guard(async { 7 }).await, Some(7));
        assert!(lifetime.inner.borrow().in_flight.is_empty());
    }

    #[tokio::test]
    async fn test_end_aborts_in_flight_fetch() {
        let lifetime = ViewLifetime::new();
        let mut fetch = std::pin::pin!(lifetime.guard(futures::future::pending::<u32>()));
        assert!(futures::poll!(fetch.as_mut()).is_pending());
        assert_eq!(lifetime.inner.borrow().in_flight.len(), 1);

        lifetime.end();
        assert_eq!(fetch.await, None);
        assert!(lifetime.inner.borrow().ended);
    }

    #[tokio::test]
    async fn test_ended_view_runs_nothing() {
        let lifetime = ViewLifetime::new();
        lifetime.end();
        let ran = Rc::new(RefCell::new(false));
        let result = lifetime
            .guard({
                let ran = ran.clone();
                async move { *ran.borrow_mut() = true }
            })
            .await;
        assert_eq!(result, None);
        assert!(!*ran.borrow());
    }
}
