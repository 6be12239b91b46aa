// src/repository.rs

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{CreateTaskRequest, InvalidTask, Task, UpdateTaskRequest};

/// Why a repository call failed. Every variant renders as a message fit
/// for direct display.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No task with this id exists on the backend.
    #[error("task {0} not found")]
    NotFound(i64),
    /// The backend answered with a payload that failed validation.
    #[error("invalid task from backend: {0}")]
    Invalid(#[from] InvalidTask),
    /// Transport or backend failure, carrying the backend's own message.
    #[error("{0}")]
    Backend(String),
}

/// The remote interface the store persists tasks through.
///
/// Implementations wrap whatever transport the app ships with; the store
/// only ever sees these six calls and their errors. The backend owns id
/// assignment and both timestamps.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Fetch every task.
    async fn list_tasks(&self) -> Result<Vec<Task>, RepositoryError>;

    /// Fetch one task by id.
    async fn get_task(&self, id: i64) -> Result<Task, RepositoryError>;

    /// Create a task and return the backend's canonical copy.
    async fn create_task(&self, request: &CreateTaskRequest) -> Result<Task, RepositoryError>;

    /// Replace the editable fields of an existing task.
    async fn update_task(&self, request: &UpdateTaskRequest) -> Result<Task, RepositoryError>;

    /// Flip a task's completion flag.
    async fn toggle_task(&self, id: i64) -> Result<Task, RepositoryError>;

    /// Delete a task by id.
    async fn delete_task(&self, id: i64) -> Result<(), RepositoryError>;
}
