use crate::audit::NewAuditLog;
use crate::errors::Result;
use crate::funds::{FundTransaction, NewFundTransaction};
use crate::projects::projects_model::{
    NewProject, ProgressUpdate, Project, ProjectDetail, ProjectFilter, ProjectRecord, ProjectSummary,
};
use crate::users::Actor;
use async_trait::async_trait;

/// Trait for project repository operations
#[async_trait]
pub trait ProjectRepositoryTrait: Send + Sync {
    /// Projects matching the filter, newest first, joined with their state.
    fn list_projects(&self, filter: &ProjectFilter) -> Result<Vec<ProjectSummary>>;
    fn get_project(&self, project_id: i32) -> Result<Option<ProjectSummary>>;
    /// Projects of one state, most recently updated first.
    fn list_projects_by_state(&self, state_id: i32) -> Result<Vec<Project>>;
    /// Projects carrying both latitude and longitude, newest first.
    fn list_mapped_projects(&self) -> Result<Vec<ProjectSummary>>;
    async fn insert_project(&self, record: ProjectRecord) -> Result<Project>;
    /// Sets progress, bumps `updated_at`, and writes the audit entry atomically.
    /// Returns the number of project rows touched.
    async fn update_progress(
        &self,
        project_id: i32,
        progress_percent: i32,
        audit: NewAuditLog,
    ) -> Result<usize>;
}

/// Trait for project service operations
#[async_trait]
pub trait ProjectServiceTrait: Send + Sync {
    fn get_projects(&self, filter: &ProjectFilter) -> Result<Vec<ProjectSummary>>;
    fn get_project_detail(&self, project_id: i32) -> Result<ProjectDetail>;
    async fn create_project(&self, new_project: NewProject) -> Result<Project>;
    async fn update_progress(
        &self,
        actor: &Actor,
        project_id: i32,
        update: ProgressUpdate,
    ) -> Result<()>;
    async fn add_fund_transaction(
        &self,
        actor: &Actor,
        project_id: i32,
        transaction: NewFundTransaction,
    ) -> Result<FundTransaction>;
}
