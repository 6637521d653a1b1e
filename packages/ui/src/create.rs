//! Submitting the "create project" and "create task" forms.
//!
//! The views keep a [`FormState`] next to their field signals. A submit
//! calls [`FormState::begin`], awaits [`create_project`] or
//! [`create_task`], and hands the result to [`FormState::finish`]. Field
//! values are never touched, so a failed submit can be retried as typed.

use api::{Backend, NewProject, NewTask, Project, Task};

use crate::flash::FlashBox;

pub const PROJECT_CREATE_FAILED: &str = "Falha ao criar o projeto. Tente novamente.";
pub const TASK_CREATE_FAILED: &str = "Falha ao criar a tarefa. Tente novamente.";

/// Submit button and inline error state of a create form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormState {
    pub pending: bool,
    pub error: Option<&'static str>,
}

impl FormState {
    /// A request is about to be sent.
    pub fn begin(&mut self) {
        self.pending = true;
        self.error = None;
    }

    /// The request finished either way.
    pub fn finish<T>(&mut self, result: &Result<T, &'static str>) {
        self.pending = false;
        self.error = result.as_ref().err().copied();
    }
}

/// Create a project and leave a flash message for the list page.
pub async fn create_project<B: Backend>(
    backend: &B,
    flash: &FlashBox,
    request: &NewProject,
) -> Result<Project, &'static str> {
    match backend.create_project(request).await {
        Ok(project) => {
            tracing::info!(id = project.id, "project created");
            flash.put(format!(r#"Projeto "{}" criado com sucesso!"#, request.name));
            Ok(project)
        }
        Err(e) => {
            tracing::error!("creating project failed: {e}");
            Err(PROJECT_CREATE_FAILED)
        }
    }
}

/// Create a task and leave a flash message for its project page.
pub async fn create_task<B: Backend>(
    backend: &B,
    flash: &FlashBox,
    request: &NewTask,
) -> Result<Task, &'static str> {
    match backend.create_task(request).await {
        Ok(task) => {
            tracing::info!(id = task.id, project_id = request.project_id, "task created");
            flash.put(format!(r#"Tarefa "{}" criada com sucesso!"#, request.title));
            Ok(task)
        }
        Err(e) => {
            tracing::error!(project_id = request.project_id, "creating task failed: {e}");
            Err(TASK_CREATE_FAILED)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{Difficulty, Endpoint, MemoryBackend, User};

    fn backend() -> MemoryBackend {
        MemoryBackend::new().signed_in(User::new("Ana", "ana@example.com"))
    }

    #[tokio::test]
    async fn test_failed_project_submit_keeps_form() {
        let backend = backend();
        backend.fail(Endpoint::CreateProject);
        let flash = FlashBox::default();
        let request = NewProject {
            name: "Campanha Q1".into(),
        };

        let mut form = FormState::default();
        form.begin();
        assert!(form.pending);
        let result = create_project(&backend, &flash, &request).await;
        form.finish(&result);

        assert_eq!(
            form,
            FormState {
                pending: false,
                error: Some(PROJECT_CREATE_FAILED),
            }
        );
        assert_eq!(request.name, "Campanha Q1");
        assert_eq!(flash.take(), None);
    }

    #[tokio::test]
    async fn test_retry_after_failure_clears_error() {
        let backend = backend();
        backend.fail(Endpoint::CreateProject);
        let flash = FlashBox::default();
        let request = NewProject {
            name: "Campanha Q1".into(),
        };

        let mut form = FormState::default();
        form.begin();
        form.finish(&create_project(&backend, &flash, &request).await);
        assert!(form.error.is_some());

        backend.recover(Endpoint::CreateProject);
        form.begin();
        assert_eq!(form.error, None);
        let result = create_project(&backend, &flash, &request).await;
        form.finish(&result);

        assert_eq!(form, FormState::default());
        assert_eq!(result.map(|project| project.name), Ok("Campanha Q1".to_string()));
        assert_eq!(
            flash.take().as_deref(),
            Some(r#"Projeto "Campanha Q1" criado com sucesso!"#)
        );
        assert_eq!(backend.calls(Endpoint::CreateProject), 2);
    }

    #[tokio::test]
    async fn test_task_submit() {
        let backend = backend();
        let project_id = backend.seed_project("Campanha Q1", &[]);
        let flash = FlashBox::default();
        let request = NewTask {
            title: "Briefing".into(),
            difficulty: Difficulty::High,
            project_id,
        };

        let mut form = FormState::default();
        form.begin();
        let result = create_task(&backend, &flash, &request).await;
        form.finish(&result);
        assert_eq!(form, FormState::default());
        assert_eq!(result.map(|task| task.project_id), Ok(project_id));
        assert_eq!(
            flash.take().as_deref(),
            Some(r#"Tarefa "Briefing" criada com sucesso!"#)
        );
    }

    #[tokio::test]
    async fn test_failed_task_submit_reports_inline() {
        let backend = backend();
        let project_id = backend.seed_project("Campanha Q1", &[]);
        backend.fail(Endpoint::CreateTask);
        let flash = FlashBox::default();
        let request = NewTask {
            title: "Briefing".into(),
            difficulty: Difficulty::Medium,
            project_id,
        };

        let mut form = FormState::default();
        form.begin();
        form.finish(&create_task(&backend, &flash, &request).await);
        assert!(!form.pending);
        assert_eq!(form.error, Some(TASK_CREATE_FAILED));
        assert_eq!(request.title, "Briefing");
        assert_eq!(flash.take(), None);
    }
}
