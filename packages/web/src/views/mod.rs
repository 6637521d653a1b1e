mod login;
pub use login::Login;

mod root;
pub use root::{PageNotFound, Root};

mod guard;
pub use guard::AuthGuard;

mod dashboard;
pub use dashboard::Dashboard;

mod projects;
pub use projects::ProjectList;

mod project_create;
pub use project_create::ProjectCreate;

mod project_page;
pub use project_page::ProjectPage;

mod task_create;
pub use task_create::TaskCreate;
