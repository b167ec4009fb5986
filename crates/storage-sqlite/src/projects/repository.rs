use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use pmajay_core::audit::NewAuditLog;
use pmajay_core::projects::{
    Project, ProjectFilter, ProjectRecord, ProjectRepositoryTrait, ProjectSummary,
};
use pmajay_core::Result;

use super::model::{into_summary, NewProjectDB, ProjectDB};
use crate::audit::insert_audit_log;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{projects, states};

pub struct ProjectRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ProjectRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ProjectRepository { pool, writer }
    }
}

#[async_trait]
impl ProjectRepositoryTrait for ProjectRepository {
    fn list_projects(&self, filter: &ProjectFilter) -> Result<Vec<ProjectSummary>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = projects::table
            .inner_join(states::table)
            .select((ProjectDB::as_select(), states::name, states::code))
            .into_boxed();
        if let Some(state_id) = filter.state_id {
            query = query.filter(projects::state_id.eq(state_id));
        }
        if let Some(component) = &filter.component {
            query = query.filter(projects::component.eq(component.clone()));
        }
        if let Some(status) = &filter.status {
            query = query.filter(projects::status.eq(status.clone()));
        }
        let rows = query
            .order((projects::created_at.desc(), projects::id.desc()))
            .load::<(ProjectDB, String, String)>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(into_summary).collect())
    }

    fn get_project(&self, project_id: i32) -> Result<Option<ProjectSummary>> {
        let mut conn = get_connection(&self.pool)?;
        let row = projects::table
            .inner_join(states::table)
            .filter(projects::id.eq(project_id))
            .select((ProjectDB::as_select(), states::name, states::code))
            .first::<(ProjectDB, String, String)>(&mut conn)
            .optional()
            .into_core()?;
        Ok(row.map(into_summary))
    }

    fn list_projects_by_state(&self, state_id: i32) -> Result<Vec<Project>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = projects::table
            .filter(projects::state_id.eq(state_id))
            .order((projects::updated_at.desc(), projects::id.desc()))
            .select(ProjectDB::as_select())
            .load::<ProjectDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Project::from).collect())
    }

    fn list_mapped_projects(&self) -> Result<Vec<ProjectSummary>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = projects::table
            .inner_join(states::table)
            .filter(projects::latitude.is_not_null())
            .filter(projects::longitude.is_not_null())
            .order((projects::created_at.desc(), projects::id.desc()))
            .select((ProjectDB::as_select(), states::name, states::code))
            .load::<(ProjectDB, String, String)>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(into_summary).collect())
    }

    async fn insert_project(&self, record: ProjectRecord) -> Result<Project> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Project> {
                let row = NewProjectDB::try_from(record)?;
                let created = diesel::insert_into(projects::table)
                    .values(row)
                    .returning(ProjectDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Project::from(created))
            })
            .await
    }

    async fn update_progress(
        &self,
        project_id: i32,
        progress_percent: i32,
        audit: NewAuditLog,
    ) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let touched = diesel::update(projects::table.find(project_id))
                    .set((
                        projects::progress_percent.eq(progress_percent),
                        projects::updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .into_core()?;
                if touched > 0 {
                    insert_audit_log(conn, audit)?;
                }
                Ok(touched)
            })
            .await
    }
}
