use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient;
use super::project::ProjectId;

pub type TaskId = u64;

/// A task belonging to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    /// Raw difficulty column. Use [`Task::difficulty`] for the typed value.
    #[serde(deserialize_with = "lenient::integer")]
    pub difficulty: i64,
    #[serde(deserialize_with = "lenient::id")]
    pub project_id: ProjectId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Typed difficulty, `None` when the stored value is outside 1..=3.
    pub fn difficulty(&self) -> Option<Difficulty> {
        Difficulty::from_raw(self.difficulty)
    }
}

/// Task difficulty as stored by the backend (`1`, `2`, `3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Difficulty {
    #[default]
    Low = 1,
    Medium = 2,
    High = 3,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Low, Difficulty::Medium, Difficulty::High];

    pub fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            1 => Some(Self::Low),
            2 => Some(Self::Medium),
            3 => Some(Self::High),
            _ => None,
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    /// Portuguese label shown in badges and in the create form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Baixa",
            Self::Medium => "Média",
            Self::High => "Alta",
        }
    }

    /// Severity class of the badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Low => "badge-success",
            Self::Medium => "badge-warning",
            Self::High => "badge-error",
        }
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.value()
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = String;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::from_raw(raw as i64).ok_or_else(|| format!("unknown difficulty {raw}"))
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: u8 = s.trim().parse().map_err(|_| format!("unknown difficulty {s:?}"))?;
        Self::try_from(raw)
    }
}

/// Body of `POST /tasks`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub difficulty: Difficulty,
    pub project_id: ProjectId,
}
