mod task;

pub use task::{
    CreateTaskRequest, InvalidTask, Priority, Task, TaskDraft, TaskRecord, UpdateTaskRequest,
};
