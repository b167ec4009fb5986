use std::sync::Arc;

use async_trait::async_trait;
use log::info;

use crate::errors::{Error, Result};
use crate::projects::ProjectRepositoryTrait;
use crate::reports::reports_model::{NewReport, Report};
use crate::reports::reports_traits::{ReportRepositoryTrait, ReportServiceTrait};
use crate::users::Actor;

pub struct ReportService {
    report_repo: Arc<dyn ReportRepositoryTrait>,
    project_repo: Arc<dyn ProjectRepositoryTrait>,
}

impl ReportService {
    pub fn new(
        report_repo: Arc<dyn ReportRepositoryTrait>,
        project_repo: Arc<dyn ProjectRepositoryTrait>,
    ) -> Self {
        ReportService {
            report_repo,
            project_repo,
        }
    }
}

#[async_trait]
impl ReportServiceTrait for ReportService {
    fn get_reports(&self, project_id: i32) -> Result<Vec<Report>> {
        if self.project_repo.get_project(project_id)?.is_none() {
            return Err(Error::not_found("Project", project_id));
        }
        self.report_repo.list_reports(project_id)
    }

    fn ensure_upload_target(&self, actor: &Actor, project_id: i32) -> Result<()> {
        let summary = self
            .project_repo
            .get_project(project_id)?
            .ok_or_else(|| Error::not_found("Project", project_id))?;
        actor.ensure_state_access(summary.project.state_id)
    }

    async fn create_report(&self, actor: &Actor, new_report: NewReport) -> Result<Report> {
        self.ensure_upload_target(actor, new_report.project_id)?;
        if new_report.uploaded_by != actor.user_id {
            return Err(Error::Forbidden(
                "reports can only be filed under the caller's own account".to_string(),
            ));
        }
        let report = self.report_repo.insert_report(new_report).await?;
        info!(
            "User {} uploaded report {} for project {}",
            actor.user_id, report.id, report.project_id
        );
        Ok(report)
    }
}
