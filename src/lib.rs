// src/lib.rs

//! Client-side state core for the Taskline todo app: the canonical
//! in-memory task store, its CRUD operations against the remote task
//! backend, and the derived filter/search view presentation layers
//! render from.
//!
//! The backend is reached through the [`TaskRepository`] port; any
//! transport can sit behind it. [`InMemoryRepository`] is a complete
//! stand-in with the real backend's semantics, used by the tests and
//! handy for local frontends.

pub mod filter;
pub mod form;
pub mod memory;
pub mod models;
pub mod repository;
pub mod store;

pub use filter::{DueWindow, StatusFilter, TaskFilter};
pub use form::{FormError, FormSession};
pub use memory::InMemoryRepository;
pub use models::{
    CreateTaskRequest, InvalidTask, Priority, Task, TaskDraft, TaskRecord, UpdateTaskRequest,
};
pub use repository::{RepositoryError, TaskRepository};
pub use store::{StoreError, TaskStore};
