use crate::errors::Result;
use crate::reports::reports_model::{NewReport, Report};
use crate::users::Actor;
use async_trait::async_trait;

#[async_trait]
pub trait ReportRepositoryTrait: Send + Sync {
    /// Reports of one project, newest first.
    fn list_reports(&self, project_id: i32) -> Result<Vec<Report>>;
    async fn insert_report(&self, new_report: NewReport) -> Result<Report>;
}

#[async_trait]
pub trait ReportServiceTrait: Send + Sync {
    fn get_reports(&self, project_id: i32) -> Result<Vec<Report>>;
    /// Fails with not-found before anything is written when the project is unknown.
    fn ensure_upload_target(&self, actor: &Actor, project_id: i32) -> Result<()>;
    async fn create_report(&self, actor: &Actor, new_report: NewReport) -> Result<Report>;
}
