//! Database models for projects.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use pmajay_core::projects::{Project, ProjectRecord, ProjectSummary};

use crate::errors::StorageError;

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::projects)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProjectDB {
    pub id: i32,
    pub title: String,
    pub component: String,
    pub state_id: i32,
    pub agency_ids: String,
    pub budget_total: f64,
    pub budget_released: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub progress_percent: i32,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::projects)]
pub struct NewProjectDB {
    pub title: String,
    pub component: String,
    pub state_id: i32,
    pub agency_ids: String,
    pub budget_total: f64,
    pub budget_released: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub progress_percent: i32,
    pub description: Option<String>,
}

impl From<ProjectDB> for Project {
    fn from(db: ProjectDB) -> Self {
        Self {
            id: db.id,
            title: db.title,
            component: db.component.parse().unwrap_or_default(),
            state_id: db.state_id,
            // Stored as a JSON array; anything unreadable is treated as empty.
            agency_ids: serde_json::from_str(&db.agency_ids).unwrap_or_default(),
            budget_total: db.budget_total,
            budget_released: db.budget_released,
            start_date: db.start_date,
            end_date: db.end_date,
            status: db.status.parse().unwrap_or_default(),
            latitude: db.latitude,
            longitude: db.longitude,
            progress_percent: db.progress_percent,
            description: db.description,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl TryFrom<ProjectRecord> for NewProjectDB {
    type Error = StorageError;

    fn try_from(record: ProjectRecord) -> std::result::Result<Self, Self::Error> {
        Ok(Self {
            title: record.title,
            component: record.component.as_str().to_string(),
            state_id: record.state_id,
            agency_ids: serde_json::to_string(&record.agency_ids)?,
            budget_total: record.budget_total,
            budget_released: record.budget_released,
            start_date: record.start_date,
            end_date: record.end_date,
            status: record.status.as_str().to_string(),
            latitude: record.latitude,
            longitude: record.longitude,
            progress_percent: record.progress_percent,
            description: record.description,
        })
    }
}

pub(crate) fn into_summary(
    (project, state_name, state_code): (ProjectDB, String, String),
) -> ProjectSummary {
    ProjectSummary {
        project: project.into(),
        state_name,
        state_code,
    }
}
