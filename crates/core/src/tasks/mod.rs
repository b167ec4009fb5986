//! Tasks module - communication items exchanged between agencies.

mod tasks_model;
mod tasks_service;
mod tasks_traits;

pub use tasks_model::{NewTask, Task, TaskFilter, TaskPriority, TaskRecord, TaskStatus, TaskView};
pub use tasks_service::TaskService;
pub use tasks_traits::{TaskRepositoryTrait, TaskServiceTrait};
