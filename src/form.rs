// src/form.rs

use log::error;
use thiserror::Error;

use crate::models::{Priority, Task, TaskDraft};
use crate::repository::{RepositoryError, TaskRepository};
use crate::store::{StoreError, TaskStore};

/// Why a form submission failed.
#[derive(Debug, Error)]
pub enum FormError {
    /// Submitted with a blank title; nothing was sent to the backend.
    #[error("Task title is required")]
    TitleRequired,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One editing session of the task form.
///
/// Starts blank for a new task or pre-filled from an existing one. A
/// successful [`FormSession::submit`] ends the session; a failed one
/// keeps the fields and error around for a retry.
#[derive(Debug, Default)]
pub struct FormSession {
    task_id: Option<i64>,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    /// `YYYY-MM-DD`, or empty for no due date.
    pub due_date: String,
    error: Option<String>,
}

impl FormSession {
    /// Start a session for a new task.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Start a session editing an existing task, pre-filled from the
    /// backend's current copy.
    pub async fn edit(repository: &dyn TaskRepository, id: i64) -> Result<Self, RepositoryError> {
        let task = repository.get_task(id).await?;
        Ok(Self {
            task_id: Some(task.id),
            title: task.title,
            description: task.description,
            priority: task.priority,
            due_date: task
                .due_at
                .map(|due| due.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            error: None,
        })
    }

    /// True when the session edits an existing task.
    pub fn is_editing(&self) -> bool {
        self.task_id.is_some()
    }

    /// The message to show next to the form, if the last submit failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validate the fields and hand the draft to the store.
    ///
    /// A blank title fails before any network call and without touching
    /// the store. On success the confirmed task comes back and the
    /// session is over; on failure the store's message is mirrored into
    /// the session for display.
    pub async fn submit(&mut self, store: &mut TaskStore) -> Result<Task, FormError> {
        if self.title.trim().is_empty() {
            let err = FormError::TitleRequired;
            self.error = Some(err.to_string());
            return Err(err);
        }

        let draft = TaskDraft {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            priority: self.priority,
            due_date: (!self.due_date.trim().is_empty()).then(|| self.due_date.clone()),
        };

        let outcome = match self.task_id {
            Some(id) => store.update(id, &draft).await,
            None => store.create(&draft).await,
        };

        match outcome {
            Ok(task) => {
                self.error = None;
                Ok(task)
            }
            Err(err) => {
                error!("failed to save task: {err}");
                self.error = Some(err.to_string());
                Err(err.into())
            }
        }
    }
}
