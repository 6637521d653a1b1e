//! Wire types shared by every backend implementation.

mod lenient;
mod pagination;
mod project;
mod task;
mod user;

pub use pagination::{page_from_url, Paginated, PaginationLink};
pub use project::{NewProject, Project, ProjectDetail, ProjectId};
pub use task::{Difficulty, NewTask, Task, TaskId};
pub use user::{Credentials, User};
