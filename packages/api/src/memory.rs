//! In-process [`Backend`] for tests and the offline demo build.
//!
//! Behaves like the real server where the client can tell the difference:
//! login needs the CSRF cookie first, `/user` answers 401 without a session,
//! project lists are paginated with a Laravel-shaped envelope, and project
//! progress is recomputed from the tasks on every read.
//!
//! Tests can make any endpoint fail with [`MemoryBackend::fail`], hold the
//! next call to an endpoint until released with [`MemoryBackend::hold`], and
//! count calls per endpoint with [`MemoryBackend::calls`].

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use futures::channel::oneshot;

use crate::backend::Backend;
use crate::error::ApiError;
use crate::models::{
    Credentials, Difficulty, NewProject, NewTask, Paginated, PaginationLink, Project,
    ProjectDetail, ProjectId, Task, TaskId, User,
};

/// Rows per page of `GET /projects`.
pub const PROJECTS_PER_PAGE: u32 = 15;

const BASE_URL: &str = "http://localhost/api/";

/// Backend endpoints, for failure injection and call counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    CsrfCookie,
    Login,
    CurrentUser,
    Logout,
    ListProjects,
    CreateProject,
    Project,
    CreateTask,
    ToggleTask,
}

#[derive(Default)]
struct State {
    accounts: Vec<(User, String)>,
    session: Option<User>,
    csrf_issued: bool,
    projects: Vec<Project>,
    tasks: Vec<Task>,
    next_project_id: ProjectId,
    next_task_id: TaskId,
    failing: HashSet<Endpoint>,
    calls: HashMap<Endpoint, usize>,
    gates: HashMap<Endpoint, oneshot::Receiver<()>>,
}

impl State {
    fn progress_of(&self, project_id: ProjectId) -> f64 {
        let tasks: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|task| task.project_id == project_id)
            .collect();
        if tasks.is_empty() {
            return 0.0;
        }
        let done = tasks.iter().filter(|task| task.completed).count() as f64;
        (done * 10_000.0 / tasks.len() as f64).round() / 100.0
    }

    fn project_with_progress(&self, project: &Project) -> Project {
        Project {
            progress: self.progress_of(project.id),
            ..project.clone()
        }
    }
}

/// In-memory backend. Clones share the same state.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    state: Arc<Mutex<State>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend with a seeded account and a few projects, used by the demo build.
    pub fn demo() -> Self {
        let backend = Self::new().with_account(User::new("Demo", "demo@plan.test"), "demo");
        backend.seed_project(
            "Campanha de Lançamento",
            &[
                ("Definir público-alvo", Difficulty::Low, true),
                ("Roteiro do vídeo", Difficulty::Medium, true),
                ("Gravação", Difficulty::High, false),
                ("Posts nas redes", Difficulty::Medium, false),
            ],
        );
        backend.seed_project(
            "Newsletter Mensal",
            &[
                ("Pauta", Difficulty::Low, false),
                ("Layout", Difficulty::Medium, false),
            ],
        );
        backend.seed_project("Black Friday", &[]);
        backend
    }

    /// Register an account that [`Backend::login`] accepts.
    pub fn with_account(self, user: User, password: &str) -> Self {
        self.lock().accounts.push((user, password.to_string()));
        self
    }

    /// Start with a live session for `user`, as if the browser still held a valid cookie.
    pub fn signed_in(self, user: User) -> Self {
        self.lock().session = Some(user);
        self
    }

    /// Insert a project with tasks `(title, difficulty, completed)`.
    pub fn seed_project(&self, name: &str, tasks: &[(&str, Difficulty, bool)]) -> ProjectId {
        let mut state = self.lock();
        let now = Utc::now();
        state.next_project_id += 1;
        let project_id = state.next_project_id;
        state.projects.push(Project {
            id: project_id,
            name: name.to_string(),
            created_at: now,
            updated_at: now,
            progress: 0.0,
        });
        for (title, difficulty, completed) in tasks {
            state.next_task_id += 1;
            let id = state.next_task_id;
            state.tasks.push(Task {
                id,
                title: title.to_string(),
                completed: *completed,
                difficulty: difficulty.value() as i64,
                project_id,
                created_at: now,
                updated_at: now,
            });
        }
        project_id
    }

    /// Make every call to `endpoint` fail with a network error.
    pub fn fail(&self, endpoint: Endpoint) {
        self.lock().failing.insert(endpoint);
    }

    /// Undo [`fail`](Self::fail).
    pub fn recover(&self, endpoint: Endpoint) {
        self.lock().failing.remove(&endpoint);
    }

    /// Hold the next call to `endpoint` until the returned sender fires (or is dropped).
    pub fn hold(&self, endpoint: Endpoint) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        self.lock().gates.insert(endpoint, gate);
        release
    }

    /// Number of calls made to `endpoint` so far, failed ones included.
    pub fn calls(&self, endpoint: Endpoint) -> usize {
        self.lock().calls.get(&endpoint).copied().unwrap_or(0)
    }

    /// Current server-side copy of a task.
    pub fn task(&self, id: TaskId) -> Option<Task> {
        self.lock().tasks.iter().find(|task| task.id == id).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Wait for a held gate, then count the call and apply failure injection.
    async fn enter(&self, endpoint: Endpoint) -> Result<MutexGuard<'_, State>, ApiError> {
        // Take the gate without holding the lock across the await.
        let gate = self.lock().gates.remove(&endpoint);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        let mut state = self.lock();
        *state.calls.entry(endpoint).or_default() += 1;
        if state.failing.contains(&endpoint) {
            return Err(ApiError::Network(format!("{endpoint:?} unavailable")));
        }
        Ok(state)
    }

    fn authenticated(state: &State) -> Result<(), ApiError> {
        match state.session {
            Some(_) => Ok(()),
            None => Err(ApiError::Unauthenticated),
        }
    }
}

fn page_url(page: u32) -> String {
    format!("{BASE_URL}projects?page={page}")
}

fn paginate(projects: Vec<Project>, page: u32) -> Paginated<Project> {
    let total = projects.len() as u64;
    let last_page = (projects.len() as u32).div_ceil(PROJECTS_PER_PAGE).max(1);
    let current_page = page.max(1);
    let offset = ((current_page - 1) * PROJECTS_PER_PAGE) as usize;
    let data: Vec<Project> = projects
        .into_iter()
        .skip(offset)
        .take(PROJECTS_PER_PAGE as usize)
        .collect();
    let (from, to) = if data.is_empty() {
        (None, None)
    } else {
        (Some(offset as u64 + 1), Some((offset + data.len()) as u64))
    };
    let prev_page_url = (current_page > 1).then(|| page_url(current_page - 1));
    let next_page_url = (current_page < last_page).then(|| page_url(current_page + 1));

    let mut links = vec![PaginationLink {
        url: prev_page_url.clone(),
        label: "&laquo; Previous".to_string(),
        active: false,
    }];
    links.extend((1..=last_page).map(|n| PaginationLink {
        url: Some(page_url(n)),
        label: n.to_string(),
        active: n == current_page,
    }));
    links.push(PaginationLink {
        url: next_page_url.clone(),
        label: "Next &raquo;".to_string(),
        active: false,
    });

    Paginated {
        current_page,
        data,
        first_page_url: Some(page_url(1)),
        from,
        last_page,
        last_page_url: Some(page_url(last_page)),
        links,
        next_page_url,
        path: Some(format!("{BASE_URL}projects")),
        per_page: PROJECTS_PER_PAGE,
        prev_page_url,
        to,
        total,
    }
}

impl Backend for MemoryBackend {
    async fn fetch_csrf_cookie(&self) -> Result<(), ApiError> {
        let mut state = self.enter(Endpoint::CsrfCookie).await?;
        state.csrf_issued = true;
        Ok(())
    }

    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let mut state = self.enter(Endpoint::Login).await?;
        if !state.csrf_issued {
            return Err(ApiError::from_status(419, None));
        }
        let user = state
            .accounts
            .iter()
            .find(|(user, password)| {
                user.email == credentials.email && *password == credentials.password
            })
            .map(|(user, _)| user.clone())
            .ok_or_else(|| ApiError::Validation {
                message: "These credentials do not match our records.".to_string(),
            })?;
        state.session = Some(user);
        Ok(())
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        let state = self.enter(Endpoint::CurrentUser).await?;
        state.session.clone().ok_or(ApiError::Unauthenticated)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let mut state = self.enter(Endpoint::Logout).await?;
        state.session = None;
        Ok(())
    }

    async fn list_projects(&self, page: u32) -> Result<Paginated<Project>, ApiError> {
        let state = self.enter(Endpoint::ListProjects).await?;
        Self::authenticated(&state)?;
        let projects = state
            .projects
            .iter()
            .map(|project| state.project_with_progress(project))
            .collect();
        Ok(paginate(projects, page))
    }

    async fn create_project(&self, project: &NewProject) -> Result<Project, ApiError> {
        let mut state = self.enter(Endpoint::CreateProject).await?;
        Self::authenticated(&state)?;
        if project.name.trim().is_empty() {
            return Err(ApiError::Validation {
                message: "The name field is required.".to_string(),
            });
        }
        let now = Utc::now();
        state.next_project_id += 1;
        let created = Project {
            id: state.next_project_id,
            name: project.name.clone(),
            created_at: now,
            updated_at: now,
            progress: 0.0,
        };
        state.projects.push(created.clone());
        Ok(created)
    }

    async fn project(&self, id: ProjectId) -> Result<ProjectDetail, ApiError> {
        let state = self.enter(Endpoint::Project).await?;
        Self::authenticated(&state)?;
        let project = state
            .projects
            .iter()
            .find(|project| project.id == id)
            .ok_or(ApiError::NotFound)?;
        Ok(ProjectDetail {
            project: state.project_with_progress(project),
            tasks: state
                .tasks
                .iter()
                .filter(|task| task.project_id == id)
                .cloned()
                .collect(),
        })
    }

    async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError> {
        let mut state = self.enter(Endpoint::CreateTask).await?;
        Self::authenticated(&state)?;
        if task.title.trim().is_empty() {
            return Err(ApiError::Validation {
                message: "The title field is required.".to_string(),
            });
        }
        if !state.projects.iter().any(|project| project.id == task.project_id) {
            return Err(ApiError::Validation {
                message: "The selected project id is invalid.".to_string(),
            });
        }
        let now = Utc::now();
        state.next_task_id += 1;
        let created = Task {
            id: state.next_task_id,
            title: task.title.clone(),
            completed: false,
            difficulty: task.difficulty.value() as i64,
            project_id: task.project_id,
            created_at: now,
            updated_at: now,
        };
        state.tasks.push(created.clone());
        Ok(created)
    }

    async fn toggle_task(&self, id: TaskId) -> Result<(), ApiError> {
        let mut state = self.enter(Endpoint::ToggleTask).await?;
        Self::authenticated(&state)?;
        let task = state
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(ApiError::NotFound)?;
        task.completed = !task.completed;
        task.updated_at = Utc::now();
        Ok(())
    }
}
