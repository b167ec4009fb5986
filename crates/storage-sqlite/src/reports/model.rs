//! Database models for reports.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use pmajay_core::reports::{NewReport, Report};

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::reports)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ReportDB {
    pub id: i32,
    pub project_id: i32,
    pub uploaded_by: i32,
    pub file_path: String,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::reports)]
pub struct NewReportDB {
    pub project_id: i32,
    pub uploaded_by: i32,
    pub file_path: String,
    pub notes: Option<String>,
}

impl From<ReportDB> for Report {
    fn from(db: ReportDB) -> Self {
        Self {
            id: db.id,
            project_id: db.project_id,
            uploaded_by: db.uploaded_by,
            file_path: db.file_path,
            notes: db.notes,
            created_at: db.created_at,
        }
    }
}

impl From<NewReport> for NewReportDB {
    fn from(domain: NewReport) -> Self {
        Self {
            project_id: domain.project_id,
            uploaded_by: domain.uploaded_by,
            file_path: domain.file_path,
            notes: domain.notes,
        }
    }
}
