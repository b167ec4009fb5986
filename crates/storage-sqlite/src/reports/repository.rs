use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use pmajay_core::reports::{NewReport, Report, ReportRepositoryTrait};
use pmajay_core::Result;

use super::model::{NewReportDB, ReportDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::reports;

pub struct ReportRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ReportRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ReportRepository { pool, writer }
    }
}

#[async_trait]
impl ReportRepositoryTrait for ReportRepository {
    fn list_reports(&self, project_id: i32) -> Result<Vec<Report>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = reports::table
            .filter(reports::project_id.eq(project_id))
            .order((reports::created_at.desc(), reports::id.desc()))
            .select(ReportDB::as_select())
            .load::<ReportDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Report::from).collect())
    }

    async fn insert_report(&self, new_report: NewReport) -> Result<Report> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Report> {
                let row = diesel::insert_into(reports::table)
                    .values(NewReportDB::from(new_report))
                    .returning(ReportDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Report::from(row))
            })
            .await
    }
}
