use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Task priority as the backend stores it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Parse a backend priority string. An empty value means the column
    /// was left at its default.
    pub fn parse(value: &str) -> Result<Self, InvalidTask> {
        match value {
            "low" => Ok(Priority::Low),
            "" | "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(InvalidTask::UnknownPriority(other.to_string())),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task as held by the store, fully validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub is_done: bool,
    /// `None` means no due date.
    pub due_at: Option<DateTime<Utc>>,
    /// Assigned by the backend; `None` when the backend omitted it.
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A task exactly as the backend sent it, before validation. Optional
/// columns and legacy rows come through here without failing the decode;
/// [`TaskRecord::validate`] is the only way to turn one into a [`Task`].
#[derive(Debug, Clone, Deserialize)]
pub struct TaskRecord {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub is_done: bool,
    #[serde(default)]
    pub due_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl TaskRecord {
    /// Check the record and produce a strict [`Task`].
    ///
    /// Absent optional fields become safe defaults (missing priority is
    /// `medium`, missing timestamps stay absent); a blank title or a
    /// priority outside the three known values rejects the record.
    pub fn validate(self) -> Result<Task, InvalidTask> {
        if self.title.trim().is_empty() {
            return Err(InvalidTask::EmptyTitle(self.id));
        }
        Ok(Task {
            id: self.id,
            title: self.title,
            description: self.description,
            priority: Priority::parse(&self.priority)?,
            is_done: self.is_done,
            due_at: self.due_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Why a backend payload was rejected at the wire boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidTask {
    #[error("task {0} has an empty title")]
    EmptyTitle(i64),
    #[error("unknown priority \"{0}\"")]
    UnknownPriority(String),
}

/// Request payload for creating a task. The backend assigns the id and
/// both timestamps.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_at: Option<DateTime<Utc>>,
}

/// Request payload for updating a task; replaces every editable field.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateTaskRequest {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_at: Option<DateTime<Utc>>,
}

/// User-entered fields submitted to create or update a task, prior to
/// backend confirmation.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    /// Calendar date as `YYYY-MM-DD`; absent or blank means no due date.
    pub due_date: Option<String>,
}
