use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient;
use super::task::Task;

pub type ProjectId = u64;

/// A project as listed by `GET /projects`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Completion percentage (0–100) computed by the backend.
    #[serde(default, deserialize_with = "lenient::number")]
    pub progress: f64,
}

/// A project with all of its tasks, as returned by `GET /projects/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl ProjectDetail {
    pub fn completed_tasks(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    /// Share of completed tasks, rounded; `None` for a project without tasks.
    pub fn completed_percent(&self) -> Option<u32> {
        if self.tasks.is_empty() {
            return None;
        }
        let ratio = self.completed_tasks() as f64 / self.tasks.len() as f64;
        Some((ratio * 100.0).round() as u32)
    }
}

/// Body of `POST /projects`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
}
