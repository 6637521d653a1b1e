use std::future::Future;

use crate::error::ApiError;
use crate::models::{
    Credentials, NewProject, NewTask, Paginated, Project, ProjectDetail, ProjectId, Task, TaskId,
    User,
};

/// Async interface to the project/task backend.
///
/// One method per REST endpoint. [`HttpBackend`](crate::HttpBackend) talks
/// to the real server; [`MemoryBackend`](crate::MemoryBackend) keeps
/// everything in process for tests and the offline demo build.
pub trait Backend {
    /// `GET {sanctum}/sanctum/csrf-cookie`. Must run once before [`login`](Backend::login).
    fn fetch_csrf_cookie(&self) -> impl Future<Output = Result<(), ApiError>>;

    /// `POST /login`.
    fn login(&self, credentials: &Credentials) -> impl Future<Output = Result<(), ApiError>>;

    /// `GET /user`: who the session cookie belongs to.
    fn current_user(&self) -> impl Future<Output = Result<User, ApiError>>;

    /// `POST /logout`.
    fn logout(&self) -> impl Future<Output = Result<(), ApiError>>;

    /// `GET /projects?page=N` (1-indexed).
    fn list_projects(&self, page: u32)
        -> impl Future<Output = Result<Paginated<Project>, ApiError>>;

    /// `POST /projects`.
    fn create_project(&self, project: &NewProject)
        -> impl Future<Output = Result<Project, ApiError>>;

    /// `GET /projects/:id`, tasks and server-computed progress included.
    fn project(&self, id: ProjectId) -> impl Future<Output = Result<ProjectDetail, ApiError>>;

    /// `POST /tasks`.
    fn create_task(&self, task: &NewTask) -> impl Future<Output = Result<Task, ApiError>>;

    /// `PATCH /tasks/:id/toggle`. The response body is not needed: callers
    /// re-fetch the project to pick up the recomputed progress.
    fn toggle_task(&self, id: TaskId) -> impl Future<Output = Result<(), ApiError>>;
}
