// src/store.rs

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use log::{debug, error, info};
use thiserror::Error;

use crate::models::{CreateTaskRequest, Task, TaskDraft, UpdateTaskRequest};
use crate::repository::{RepositoryError, TaskRepository};

/// Why a store operation failed.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The draft's due date was not a `YYYY-MM-DD` calendar date. Caught
    /// before any repository call and never recorded in the store's
    /// error state.
    #[error("invalid due date \"{0}\"")]
    InvalidDueDate(String),
    /// The repository call failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Single source of truth for the task collection and the surrounding
/// request lifecycle (loading flag, last error).
///
/// The collection keeps insertion order with new tasks prepended; updates
/// and toggles replace their entry in place. All mutation goes through
/// the operations below — consumers read via [`TaskStore::tasks`] and
/// never hold the collection mutably.
pub struct TaskStore {
    repository: Arc<dyn TaskRepository>,
    tasks: Vec<Task>,
    loading: bool,
    error: Option<String>,
}

impl TaskStore {
    pub fn new(repository: Arc<dyn TaskRepository>) -> Self {
        Self {
            repository,
            tasks: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// The canonical task collection, newest first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// True while a load/create/update call is in flight.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// The most recent operation failure, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replace the collection with the backend's current task list.
    ///
    /// On failure the previous collection stays as-is and the error is
    /// recorded for display. No automatic retry; the user re-triggers.
    pub async fn load(&mut self) {
        self.loading = true;
        self.error = None;

        let outcome = self.repository.list_tasks().await;
        self.loading = false;

        match outcome {
            Ok(tasks) => {
                info!("loaded {} tasks", tasks.len());
                self.tasks = tasks;
            }
            Err(err) => {
                error!("failed to load tasks: {err}");
                self.error = Some(err.to_string());
            }
        }
    }

    /// Create a task from a draft and prepend the backend's confirmed
    /// copy to the collection.
    ///
    /// Failures are recorded and propagated so the initiating flow can
    /// react (the form stays open).
    pub async fn create(&mut self, draft: &TaskDraft) -> Result<Task, StoreError> {
        let request = CreateTaskRequest {
            title: draft.title.clone(),
            description: draft.description.clone(),
            priority: draft.priority,
            due_at: convert_due_date(draft)?,
        };

        self.loading = true;
        self.error = None;

        let outcome = self.repository.create_task(&request).await;
        self.loading = false;

        match outcome {
            Ok(task) => {
                info!("created task {}", task.id);
                self.tasks.insert(0, task.clone());
                Ok(task)
            }
            Err(err) => {
                error!("failed to create task: {err}");
                self.error = Some(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Update an existing task, keeping its position in the collection.
    pub async fn update(&mut self, id: i64, draft: &TaskDraft) -> Result<Task, StoreError> {
        let request = UpdateTaskRequest {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            priority: draft.priority,
            due_at: convert_due_date(draft)?,
        };

        self.loading = true;
        self.error = None;

        let outcome = self.repository.update_task(&request).await;
        self.loading = false;

        match outcome {
            Ok(task) => {
                debug!("updated task {}", task.id);
                self.replace(task.clone());
                Ok(task)
            }
            Err(err) => {
                error!("failed to update task {id}: {err}");
                self.error = Some(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Flip a task's completion flag.
    ///
    /// Best-effort: a failure is recorded and `None` comes back, and the
    /// global loading flag is left alone so one slow toggle does not
    /// freeze unrelated interactions.
    pub async fn toggle(&mut self, id: i64) -> Option<Task> {
        match self.repository.toggle_task(id).await {
            Ok(task) => {
                debug!("toggled task {} to is_done={}", task.id, task.is_done);
                self.replace(task.clone());
                Some(task)
            }
            Err(err) => {
                error!("failed to toggle task {id}: {err}");
                self.error = Some(err.to_string());
                None
            }
        }
    }

    /// Delete a task by id. Best-effort like [`TaskStore::toggle`]; on
    /// failure the collection is left unchanged.
    pub async fn remove(&mut self, id: i64) {
        match self.repository.delete_task(id).await {
            Ok(()) => {
                info!("deleted task {id}");
                self.tasks.retain(|t| t.id != id);
            }
            Err(err) => {
                error!("failed to delete task {id}: {err}");
                self.error = Some(err.to_string());
            }
        }
    }

    /// Swap the matching entry in place, preserving its position. A miss
    /// is a no-op; the next load brings the collection back in sync.
    fn replace(&mut self, task: Task) {
        if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == task.id) {
            *slot = task;
        }
    }
}

/// Convert the draft's due-date string into the instant the backend
/// expects (UTC midnight); blank or absent means no due date.
fn convert_due_date(draft: &TaskDraft) -> Result<Option<DateTime<Utc>>, StoreError> {
    let Some(raw) = draft.due_date.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| StoreError::InvalidDueDate(raw.to_string()))?;
    Ok(Some(date.and_time(NaiveTime::MIN).and_utc()))
}
