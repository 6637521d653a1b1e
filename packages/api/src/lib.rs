//! # API crate: backend access for Plan Marketing
//!
//! Everything the client knows about the project/task backend lives here,
//! independent of the UI framework so it can be unit tested natively.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Wire types: `User`, `Project`, `ProjectDetail`, `Task`, `Difficulty`, the Laravel pagination envelope and request bodies |
//! | [`config`] | `ApiConfig`: API and CSRF base URLs from the environment |
//! | [`error`] | `ApiError`, the single error type of every backend call |
//! | [`backend`] | The `Backend` trait, one async method per REST endpoint |
//! | [`http`] | `HttpBackend`, the reqwest client with cookie credentials and CSRF handling |
//! | [`memory`] | `MemoryBackend`, an in-process fake server for tests and the demo build |
//!
//! ## Endpoints
//!
//! | Method | Path | `Backend` method |
//! |--------|------|------------------|
//! | GET | `sanctum/csrf-cookie` (root domain) | `fetch_csrf_cookie` |
//! | POST | `/login` | `login` |
//! | GET | `/user` | `current_user` |
//! | POST | `/logout` | `logout` |
//! | GET | `/projects?page=N` | `list_projects` |
//! | POST | `/projects` | `create_project` |
//! | GET | `/projects/:id` | `project` |
//! | POST | `/tasks` | `create_task` |
//! | PATCH | `/tasks/:id/toggle` | `toggle_task` |

pub mod backend;
pub mod config;
pub mod error;
pub mod http;
pub mod memory;
pub mod models;

pub use backend::Backend;
pub use config::ApiConfig;
pub use error::ApiError;
pub use http::HttpBackend;
pub use memory::{Endpoint, MemoryBackend};
pub use models::{
    Credentials, Difficulty, NewProject, NewTask, Paginated, PaginationLink, Project,
    ProjectDetail, ProjectId, Task, TaskId, User,
};
