use crate::errors::Result;
use crate::tasks::tasks_model::{NewTask, Task, TaskFilter, TaskRecord, TaskView};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for task repository operations
#[async_trait]
pub trait TaskRepositoryTrait: Send + Sync {
    /// All tasks, newest first.
    fn list_tasks(&self) -> Result<Vec<Task>>;
    fn get_task(&self, task_id: i32) -> Result<Option<Task>>;
    async fn insert_task(&self, record: TaskRecord) -> Result<Task>;
    async fn update_task(&self, task_id: i32, record: TaskRecord) -> Result<Task>;
    async fn delete_task(&self, task_id: i32) -> Result<usize>;
}

/// Trait for task service operations
#[async_trait]
pub trait TaskServiceTrait: Send + Sync {
    /// Tasks matching the filter. The status filter applies to the effective
    /// status as of `today`.
    fn get_tasks(&self, filter: &TaskFilter, today: NaiveDate) -> Result<Vec<TaskView>>;
    fn get_task(&self, task_id: i32, today: NaiveDate) -> Result<TaskView>;
    async fn create_task(&self, new_task: NewTask) -> Result<Task>;
    async fn update_task(&self, task_id: i32, update: NewTask) -> Result<Task>;
    async fn delete_task(&self, task_id: i32) -> Result<()>;
}
