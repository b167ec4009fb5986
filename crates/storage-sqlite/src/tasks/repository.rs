use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use pmajay_core::tasks::{Task, TaskRecord, TaskRepositoryTrait};
use pmajay_core::Result;

use super::model::{TaskDB, TaskRecordDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::tasks;

pub struct TaskRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TaskRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        TaskRepository { pool, writer }
    }
}

#[async_trait]
impl TaskRepositoryTrait for TaskRepository {
    fn list_tasks(&self) -> Result<Vec<Task>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = tasks::table
            .order((tasks::created_at.desc(), tasks::id.desc()))
            .select(TaskDB::as_select())
            .load::<TaskDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Task::from).collect())
    }

    fn get_task(&self, task_id: i32) -> Result<Option<Task>> {
        let mut conn = get_connection(&self.pool)?;
        let row = tasks::table
            .find(task_id)
            .select(TaskDB::as_select())
            .first::<TaskDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(row.map(Task::from))
    }

    async fn insert_task(&self, record: TaskRecord) -> Result<Task> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Task> {
                let row = diesel::insert_into(tasks::table)
                    .values(TaskRecordDB::new(record, Utc::now().naive_utc()))
                    .returning(TaskDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Task::from(row))
            })
            .await
    }

    async fn update_task(&self, task_id: i32, record: TaskRecord) -> Result<Task> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Task> {
                let row = diesel::update(tasks::table.find(task_id))
                    .set(TaskRecordDB::new(record, Utc::now().naive_utc()))
                    .returning(TaskDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Task::from(row))
            })
            .await
    }

    async fn delete_task(&self, task_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(tasks::table.find(task_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
