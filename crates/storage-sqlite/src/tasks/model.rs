//! Database models for tasks.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use pmajay_core::tasks::{Task, TaskRecord};

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::tasks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TaskDB {
    pub id: i32,
    pub sender: String,
    pub receiver: String,
    pub title: String,
    pub description: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub priority: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insert and full-replace payload.
#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskRecordDB {
    pub sender: String,
    pub receiver: String,
    pub title: String,
    pub description: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub priority: String,
    pub status: String,
    pub updated_at: NaiveDateTime,
}

impl From<TaskDB> for Task {
    fn from(db: TaskDB) -> Self {
        Self {
            id: db.id,
            sender: db.sender,
            receiver: db.receiver,
            title: db.title,
            description: db.description,
            deadline: db.deadline,
            priority: db.priority.parse().unwrap_or_default(),
            status: db.status.parse().unwrap_or_default(),
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl TaskRecordDB {
    pub fn new(record: TaskRecord, updated_at: NaiveDateTime) -> Self {
        Self {
            sender: record.sender,
            receiver: record.receiver,
            title: record.title,
            description: record.description,
            deadline: record.deadline,
            priority: record.priority.as_str().to_string(),
            status: record.status.as_str().to_string(),
            updated_at,
        }
    }
}
