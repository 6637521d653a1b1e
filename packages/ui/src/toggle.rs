//! Optimistic task completion toggling.
//!
//! The toggle is a two-phase protocol:
//!
//! 1. [`PendingToggle::apply`] flips the task in local state right away and
//!    keeps the task list as it was before the flip.
//! 2. The backend answers:
//!    - accepted: the whole project is re-fetched (progress is computed by
//!      the server and cannot be derived locally) and replaces local state;
//!    - rejected: [`PendingToggle::rollback`] restores the saved task list
//!      verbatim.
//!
//! [`toggle_task`] drives both phases against any [`ProjectSlot`].

use api::{ApiError, Backend, ProjectDetail, Task, TaskId};
use dioxus::prelude::*;

/// Where the view keeps the loaded project.
pub trait ProjectSlot {
    fn load(&self) -> Option<ProjectDetail>;
    fn store(&self, detail: ProjectDetail);
}

impl ProjectSlot for Signal<Option<ProjectDetail>> {
    fn load(&self) -> Option<ProjectDetail> {
        self.peek().clone()
    }

    fn store(&self, detail: ProjectDetail) {
        let mut signal = *self;
        signal.set(Some(detail));
    }
}

/// A flip applied locally and not yet confirmed by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingToggle {
    task_id: TaskId,
    snapshot: Vec<Task>,
}

impl PendingToggle {
    /// Flip `task_id` in `detail`. `None` if the task is not in the project.
    pub fn apply(detail: &mut ProjectDetail, task_id: TaskId) -> Option<Self> {
        let snapshot = detail.tasks.clone();
        let task = detail.tasks.iter_mut().find(|task| task.id == task_id)?;
        task.completed = !task.completed;
        Some(Self { task_id, snapshot })
    }

    /// The backend accepted the flip; the snapshot is no longer needed.
    pub fn confirm(self) -> TaskId {
        self.task_id
    }

    /// Put back the task list exactly as it was before [`apply`](Self::apply).
    pub fn rollback(self, detail: &mut ProjectDetail) {
        detail.tasks = self.snapshot;
    }
}

/// How a toggle ended.
#[derive(Debug, Clone, PartialEq)]
pub enum ToggleOutcome {
    /// Nothing loaded or unknown task; no request was sent.
    Skipped,
    /// The backend accepted the toggle. `refresh` is the result of the
    /// reconciling re-fetch; a failed re-fetch does not undo the toggle.
    Confirmed { refresh: Result<(), ApiError> },
    /// The backend rejected the toggle and local state was restored.
    RolledBack(ApiError),
}

/// Toggle a task optimistically and reconcile with the backend.
pub async fn toggle_task<B, S>(backend: &B, slot: &S, task_id: TaskId) -> ToggleOutcome
where
    B: Backend,
    S: ProjectSlot,
{
    let Some(mut detail) = slot.load() else {
        return ToggleOutcome::Skipped;
    };
    let Some(pending) = PendingToggle::apply(&mut detail, task_id) else {
        return ToggleOutcome::Skipped;
    };
    let project_id = detail.project.id;
    slot.store(detail);

    match backend.toggle_task(task_id).await {
        Ok(()) => {
            pending.confirm();
            let refresh = match backend.project(project_id).await {
                Ok(fresh) => {
                    slot.store(fresh);
                    Ok(())
                }
                Err(e) => {
                    tracing::error!(project_id, "re-fetch after toggle failed: {e}");
                    Err(e)
                }
            };
            ToggleOutcome::Confirmed { refresh }
        }
        Err(e) => {
            tracing::error!(task_id, "toggle rejected, rolling back: {e}");
            if let Some(mut current) = slot.load() {
                pending.rollback(&mut current);
                slot.store(current);
            }
            ToggleOutcome::RolledBack(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use api::{Difficulty, Endpoint, MemoryBackend, User};

    impl ProjectSlot for Rc<RefCell<Option<ProjectDetail>>> {
        fn load(&self) -> Option<ProjectDetail> {
            self.borrow().clone()
        }

        fn store(&self, detail: ProjectDetail) {
            *self.borrow_mut() = Some(detail);
        }
    }

    async fn setup() -> (MemoryBackend, Rc<RefCell<Option<ProjectDetail>>>) {
        let backend = MemoryBackend::new().signed_in(User::new("Ana", "ana@example.com"));
        let id = backend.seed_project(
            "Campanha Q1",
            &[
                ("Briefing", Difficulty::Low, true),
                ("Arte", Difficulty::High, false),
            ],
        );
        let detail = backend.project(id).await.unwrap();
        (backend, Rc::new(RefCell::new(Some(detail))))
    }

    fn task(slot: &Rc<RefCell<Option<ProjectDetail>>>, index: usize) -> Task {
        slot.load().unwrap().tasks[index].clone()
    }

    #[tokio::test]
    async fn test_flip_is_visible_before_backend_answers() {
        let (backend, slot) = setup().await;
        let arte = task(&slot, 1);
        let release = backend.hold(Endpoint::ToggleTask);

        let mut toggle = std::pin::pin!(toggle_task(&backend, &slot, arte.id));
        assert!(futures::poll!(toggle.as_mut()).is_pending());
        assert!(task(&slot, 1).completed);
        assert_eq!(slot.load().unwrap().project.progress, 50.0);

        release.send(()).unwrap();
        assert_eq!(toggle.await, ToggleOutcome::Confirmed { refresh: Ok(()) });
        assert!(task(&slot, 1).completed);
        // Re-fetched: progress recomputed by the backend.
        assert_eq!(slot.load().unwrap().project.progress, 100.0);
    }

    #[tokio::test]
    async fn test_rejected_toggle_restores_snapshot() {
        let (backend, slot) = setup().await;
        let before = slot.load().unwrap().tasks;
        let briefing = task(&slot, 0);
        let release = backend.hold(Endpoint::ToggleTask);
        backend.fail(Endpoint::ToggleTask);

        let mut toggle = std::pin::pin!(toggle_task(&backend, &slot, briefing.id));
        assert!(futures::poll!(toggle.as_mut()).is_pending());
        assert!(!task(&slot, 0).completed);

        release.send(()).unwrap();
        assert!(matches!(toggle.await, ToggleOutcome::RolledBack(ApiError::Network(_))));
        assert_eq!(slot.load().unwrap().tasks, before);
        assert_eq!(backend.calls(Endpoint::Project), 1);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_toggle() {
        let (backend, slot) = setup().await;
        let arte = task(&slot, 1);
        backend.fail(Endpoint::Project);

        let outcome = toggle_task(&backend, &slot, arte.id).await;
        assert!(matches!(outcome, ToggleOutcome::Confirmed { refresh: Err(_) }));
        assert!(task(&slot, 1).completed);
        assert!(backend.task(arte.id).unwrap().completed);
    }

    #[tokio::test]
    async fn test_unknown_task_is_skipped() {
        let (backend, slot) = setup().await;
        assert_eq!(toggle_task(&backend, &slot, 999).await, ToggleOutcome::Skipped);
        assert_eq!(backend.calls(Endpoint::ToggleTask), 0);

        let empty: Rc<RefCell<Option<ProjectDetail>>> = Rc::new(RefCell::new(None));
        assert_eq!(toggle_task(&backend, &empty, 1).await, ToggleOutcome::Skipped);
    }

    #[tokio::test]
    async fn test_pending_toggle_roundtrip() {
        let (_, slot) = setup().await;
        let mut detail = slot.load().unwrap();
        let original = detail.tasks.clone();
        let pending = PendingToggle::apply(&mut detail, original[0].id).unwrap();
        assert_ne!(detail.tasks, original);
        pending.clone().rollback(&mut detail);
        assert_eq!(detail.tasks, original);
        assert_eq!(pending.confirm(), original[0].id);
    }
}
