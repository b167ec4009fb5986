use std::path::PathBuf;
use std::sync::Arc;

use crate::{auth::AuthManager, config::Config};
use pmajay_core::{
    agencies::{AgencyService, AgencyServiceTrait},
    audit::{AuditService, AuditServiceTrait},
    dashboard::{DashboardService, DashboardServiceTrait},
    fund_records::{FundRecordService, FundRecordServiceTrait},
    projects::{ProjectService, ProjectServiceTrait},
    reports::{ReportService, ReportServiceTrait},
    states::{StateService, StateServiceTrait},
    tasks::{TaskService, TaskServiceTrait},
    users::{UserService, UserServiceTrait},
};
use pmajay_storage_sqlite::{
    agencies::AgencyRepository,
    audit::AuditRepository,
    dashboard::DashboardRepository,
    db::{self, DbPool},
    fund_records::FundRecordRepository,
    funds::FundTransactionRepository,
    projects::ProjectRepository,
    reports::ReportRepository,
    seed_sample_data,
    states::StateRepository,
    tasks::TaskRepository,
    users::UserRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub auth: Arc<AuthManager>,
    pub user_service: Arc<dyn UserServiceTrait>,
    pub state_service: Arc<dyn StateServiceTrait>,
    pub agency_service: Arc<dyn AgencyServiceTrait>,
    pub project_service: Arc<dyn ProjectServiceTrait>,
    pub report_service: Arc<dyn ReportServiceTrait>,
    pub dashboard_service: Arc<dyn DashboardServiceTrait>,
    pub audit_service: Arc<dyn AuditServiceTrait>,
    pub task_service: Arc<dyn TaskServiceTrait>,
    pub fund_record_service: Arc<dyn FundRecordServiceTrait>,
    pub pool: Arc<DbPool>,
    pub upload_dir: PathBuf,
}

pub fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    if config.seed_sample_data && seed_sample_data(&writer).await? {
        tracing::info!("Loaded sample data into an empty database");
    }

    std::fs::create_dir_all(&config.upload_dir)?;
    tracing::info!("Storing uploads in {}", config.upload_dir.display());

    let auth = Arc::new(AuthManager::from_config(
        config.jwt_secret.as_deref(),
        config.token_ttl,
    )?);

    let state_repo = Arc::new(StateRepository::new(pool.clone(), writer.clone()));
    let agency_repo = Arc::new(AgencyRepository::new(pool.clone(), writer.clone()));
    let project_repo = Arc::new(ProjectRepository::new(pool.clone(), writer.clone()));
    let fund_repo = Arc::new(FundTransactionRepository::new(pool.clone(), writer.clone()));
    let report_repo = Arc::new(ReportRepository::new(pool.clone(), writer.clone()));
    let user_repo = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let task_repo = Arc::new(TaskRepository::new(pool.clone(), writer.clone()));
    let fund_record_repo = Arc::new(FundRecordRepository::new(pool.clone(), writer.clone()));
    let audit_repo = Arc::new(AuditRepository::new(pool.clone()));
    let dashboard_repo = Arc::new(DashboardRepository::new(pool.clone()));

    let user_service = Arc::new(UserService::new(user_repo));
    let state_service = Arc::new(StateService::new(state_repo.clone()));
    let agency_service = Arc::new(AgencyService::new(agency_repo.clone()));
    let audit_service = Arc::new(AuditService::new(audit_repo));
    let task_service = Arc::new(TaskService::new(task_repo.clone()));
    let fund_record_service = Arc::new(FundRecordService::new(fund_record_repo));
    let project_service = Arc::new(ProjectService::new(
        project_repo.clone(),
        state_repo.clone(),
        fund_repo.clone(),
        report_repo.clone(),
    ));
    let report_service = Arc::new(ReportService::new(report_repo, project_repo.clone()));
    let dashboard_service = Arc::new(DashboardService::new(
        dashboard_repo,
        state_repo,
        project_repo,
        agency_repo,
        task_repo,
        fund_repo,
    ));

    Ok(Arc::new(AppState {
        auth,
        user_service,
        state_service,
        agency_service,
        project_service,
        report_service,
        dashboard_service,
        audit_service,
        task_service,
        fund_record_service,
        pool,
        upload_dir: config.upload_dir.clone(),
    }))
}
