use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};
use serde_json::json;

use crate::audit::NewAuditLog;
use crate::constants::{
    AUDIT_ACTION_FUND_TRANSACTION, AUDIT_ACTION_UPDATE_PROGRESS, AUDIT_ENTITY_PROJECT,
};
use crate::errors::{Error, Result};
use crate::funds::{FundTransaction, FundTransactionRepositoryTrait, NewFundTransaction};
use crate::projects::projects_model::{
    check_progress, NewProject, ProgressUpdate, Project, ProjectComponent, ProjectDetail,
    ProjectFilter, ProjectStatus, ProjectSummary,
};
use crate::projects::projects_traits::{ProjectRepositoryTrait, ProjectServiceTrait};
use crate::reports::ReportRepositoryTrait;
use crate::states::StateRepositoryTrait;
use crate::users::Actor;

pub struct ProjectService {
    project_repo: Arc<dyn ProjectRepositoryTrait>,
    state_repo: Arc<dyn StateRepositoryTrait>,
    fund_repo: Arc<dyn FundTransactionRepositoryTrait>,
    report_repo: Arc<dyn ReportRepositoryTrait>,
}

impl ProjectService {
    pub fn new(
        project_repo: Arc<dyn ProjectRepositoryTrait>,
        state_repo: Arc<dyn StateRepositoryTrait>,
        fund_repo: Arc<dyn FundTransactionRepositoryTrait>,
        report_repo: Arc<dyn ReportRepositoryTrait>,
    ) -> Self {
        ProjectService {
            project_repo,
            state_repo,
            fund_repo,
            report_repo,
        }
    }

    /// Loads a project and checks the caller may touch it.
    fn load_for_actor(&self, actor: &Actor, project_id: i32) -> Result<ProjectSummary> {
        let summary = self
            .project_repo
            .get_project(project_id)?
            .ok_or_else(|| Error::not_found("Project", project_id))?;
        actor.ensure_state_access(summary.project.state_id)?;
        Ok(summary)
    }
}

fn normalize_filter(filter: &ProjectFilter) -> Result<ProjectFilter> {
    let component = match filter.component.as_deref() {
        Some(c) if !c.is_empty() => Some(c.parse::<ProjectComponent>()?.as_str().to_string()),
        _ => None,
    };
    let status = match filter.status.as_deref() {
        Some(s) if !s.is_empty() => Some(s.parse::<ProjectStatus>()?.as_str().to_string()),
        _ => None,
    };
    Ok(ProjectFilter {
        state_id: filter.state_id,
        component,
        status,
    })
}

#[async_trait]
impl ProjectServiceTrait for ProjectService {
    fn get_projects(&self, filter: &ProjectFilter) -> Result<Vec<ProjectSummary>> {
        let filter = normalize_filter(filter)?;
        self.project_repo.list_projects(&filter)
    }

    fn get_project_detail(&self, project_id: i32) -> Result<ProjectDetail> {
        let summary = self
            .project_repo
            .get_project(project_id)?
            .ok_or_else(|| Error::not_found("Project", project_id))?;
        let transactions = self.fund_repo.list_transactions(project_id)?;
        let reports = self.report_repo.list_reports(project_id)?;
        Ok(ProjectDetail {
            summary,
            transactions,
            reports,
        })
    }

    async fn create_project(&self, new_project: NewProject) -> Result<Project> {
        let record = new_project.validate()?;
        if self.state_repo.get_state(record.state_id)?.is_none() {
            return Err(Error::not_found("State", record.state_id));
        }
        let project = self.project_repo.insert_project(record).await?;
        info!("Created project {} '{}'", project.id, project.title);
        Ok(project)
    }

    async fn update_progress(
        &self,
        actor: &Actor,
        project_id: i32,
        update: ProgressUpdate,
    ) -> Result<()> {
        check_progress(update.progress_percent)?;
        self.load_for_actor(actor, project_id)?;

        let audit = NewAuditLog {
            user_id: Some(actor.user_id),
            action: AUDIT_ACTION_UPDATE_PROGRESS.to_string(),
            entity_type: AUDIT_ENTITY_PROJECT.to_string(),
            entity_id: Some(project_id),
            metadata: Some(json!({
                "progress_percent": update.progress_percent,
                "note": update.note,
            })),
        };
        let touched = self
            .project_repo
            .update_progress(project_id, update.progress_percent, audit)
            .await?;
        if touched == 0 {
            return Err(Error::not_found("Project", project_id));
        }
        debug!(
            "Project {} progress set to {}% by user {}",
            project_id, update.progress_percent, actor.user_id
        );
        Ok(())
    }

    async fn add_fund_transaction(
        &self,
        actor: &Actor,
        project_id: i32,
        transaction: NewFundTransaction,
    ) -> Result<FundTransaction> {
        let transaction_type = transaction.validate()?;
        self.load_for_actor(actor, project_id)?;

        let audit = NewAuditLog {
            user_id: Some(actor.user_id),
            action: AUDIT_ACTION_FUND_TRANSACTION.to_string(),
            entity_type: AUDIT_ENTITY_PROJECT.to_string(),
            entity_id: Some(project_id),
            metadata: Some(json!({
                "amount": transaction.amount,
                "type": transaction_type.as_str(),
                "note": transaction.note,
            })),
        };
        let recorded = self
            .fund_repo
            .record_transaction(
                project_id,
                transaction.amount,
                transaction_type,
                transaction.note,
                audit,
            )
            .await?;
        info!(
            "Recorded {} of {} against project {}",
            recorded.transaction_type, recorded.amount, project_id
        );
        Ok(recorded)
    }
}
