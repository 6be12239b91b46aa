// src/memory.rs

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use tokio::sync::Mutex;

use crate::models::{CreateTaskRequest, Priority, Task, UpdateTaskRequest};
use crate::repository::{RepositoryError, TaskRepository};

/// In-memory [`TaskRepository`] with the real backend's semantics: serial
/// ids starting at 1, timestamps stamped on create and bumped on every
/// write, priority-then-recency listing order, not-found errors for
/// unknown ids. Backs tests and local frontends.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    state: Mutex<State>,
}

#[derive(Debug, Default)]
struct State {
    tasks: Vec<Task>,
    next_id: i64,
}

fn priority_rank(priority: Priority) -> u8 {
    match priority {
        Priority::High => 0,
        Priority::Medium => 1,
        Priority::Low => 2,
    }
}

#[async_trait]
impl TaskRepository for InMemoryRepository {
    async fn list_tasks(&self) -> Result<Vec<Task>, RepositoryError> {
        let state = self.state.lock().await;
        let mut tasks = state.tasks.clone();
        // Same ordering the backend's list query uses: high priority
        // first, newest first within a priority.
        tasks.sort_by(|a, b| {
            priority_rank(a.priority)
                .cmp(&priority_rank(b.priority))
                .then(b.created_at.cmp(&a.created_at))
                .then(b.id.cmp(&a.id))
        });
        Ok(tasks)
    }

    async fn get_task(&self, id: i64) -> Result<Task, RepositoryError> {
        let state = self.state.lock().await;
        state
            .tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn create_task(&self, request: &CreateTaskRequest) -> Result<Task, RepositoryError> {
        let mut state = self.state.lock().await;
        state.next_id += 1;
        let now = Utc::now();
        let task = Task {
            id: state.next_id,
            title: request.title.clone(),
            description: request.description.clone(),
            priority: request.priority,
            is_done: false,
            due_at: request.due_at,
            created_at: Some(now),
            updated_at: Some(now),
        };
        state.tasks.push(task.clone());
        debug!("created task {}", task.id);
        Ok(task)
    }

    async fn update_task(&self, request: &UpdateTaskRequest) -> Result<Task, RepositoryError> {
        let mut state = self.state.lock().await;
        let task = state
            .tasks
            .iter_mut()
            .find(|t| t.id == request.id)
            .ok_or(RepositoryError::NotFound(request.id))?;
        task.title = request.title.clone();
        task.description = request.description.clone();
        task.priority = request.priority;
        task.due_at = request.due_at;
        task.updated_at = Some(Utc::now());
        Ok(task.clone())
    }

    async fn toggle_task(&self, id: i64) -> Result<Task, RepositoryError> {
        let mut state = self.state.lock().await;
        let task = state
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(RepositoryError::NotFound(id))?;
        task.is_done = !task.is_done;
        task.updated_at = Some(Utc::now());
        Ok(task.clone())
    }

    async fn delete_task(&self, id: i64) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().await;
        let before = state.tasks.len();
        state.tasks.retain(|t| t.id != id);
        if state.tasks.len() == before {
            return Err(RepositoryError::NotFound(id));
        }
        debug!("deleted task {id}");
        Ok(())
    }
}
