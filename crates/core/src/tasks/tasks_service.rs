use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::{Error, Result};
use crate::tasks::tasks_model::{NewTask, Task, TaskFilter, TaskPriority, TaskStatus, TaskView};
use crate::tasks::tasks_traits::{TaskRepositoryTrait, TaskServiceTrait};

pub struct TaskService<T: TaskRepositoryTrait> {
    task_repo: Arc<T>,
}

impl<T: TaskRepositoryTrait> TaskService<T> {
    pub fn new(task_repo: Arc<T>) -> Self {
        TaskService { task_repo }
    }
}

#[async_trait]
impl<T: TaskRepositoryTrait + Send + Sync> TaskServiceTrait for TaskService<T> {
    fn get_tasks(&self, filter: &TaskFilter, today: NaiveDate) -> Result<Vec<TaskView>> {
        let status = match filter.status.as_deref() {
            Some(s) if !s.is_empty() && s != "All" => Some(s.parse::<TaskStatus>()?),
            _ => None,
        };
        let priority = match filter.priority.as_deref() {
            Some(p) if !p.is_empty() && p != "All" => Some(p.parse::<TaskPriority>()?),
            _ => None,
        };
        Ok(self
            .task_repo
            .list_tasks()?
            .into_iter()
            .map(|task| TaskView::new(task, today))
            .filter(|view| status.map_or(true, |s| view.effective_status == s))
            .filter(|view| priority.map_or(true, |p| view.task.priority == p))
            .collect())
    }

    fn get_task(&self, task_id: i32, today: NaiveDate) -> Result<TaskView> {
        self.task_repo
            .get_task(task_id)?
            .map(|task| TaskView::new(task, today))
            .ok_or_else(|| Error::not_found("Task", task_id))
    }

    async fn create_task(&self, new_task: NewTask) -> Result<Task> {
        let record = new_task.validate()?;
        self.task_repo.insert_task(record).await
    }

    async fn update_task(&self, task_id: i32, update: NewTask) -> Result<Task> {
        let record = update.validate()?;
        if self.task_repo.get_task(task_id)?.is_none() {
            return Err(Error::not_found("Task", task_id));
        }
        self.task_repo.update_task(task_id, record).await
    }

    async fn delete_task(&self, task_id: i32) -> Result<()> {
        match self.task_repo.delete_task(task_id).await? {
            0 => Err(Error::not_found("Task", task_id)),
            _ => Ok(()),
        }
    }
}
