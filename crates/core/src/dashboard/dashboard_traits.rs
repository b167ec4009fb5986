use chrono::NaiveDate;

use crate::dashboard::dashboard_model::{
    BudgetTotals, CentralDashboard, ComponentBreakdown, ProgressSample, PublicDashboard,
    StateBreakdown, StateDashboard, SummaryStats,
};
use crate::errors::Result;
use crate::users::Actor;

/// Aggregate queries backing the dashboards.
pub trait DashboardRepositoryTrait: Send + Sync {
    /// Count and budget sums over all projects, or one state's projects.
    fn project_totals(&self, state_id: Option<i32>) -> Result<BudgetTotals>;
    fn ongoing_progress_samples(&self) -> Result<Vec<ProgressSample>>;
    /// Every state, including those without projects, by project count descending.
    fn state_breakdown(&self) -> Result<Vec<StateBreakdown>>;
    fn component_breakdown(&self) -> Result<Vec<ComponentBreakdown>>;
}

pub trait DashboardServiceTrait: Send + Sync {
    fn get_central_dashboard(&self, today: NaiveDate) -> Result<CentralDashboard>;
    fn export_state_report(&self) -> Result<String>;
    fn get_state_dashboard(&self, actor: &Actor, state_id: i32) -> Result<StateDashboard>;
    fn get_public_dashboard(&self) -> Result<PublicDashboard>;
    fn get_summary_stats(&self, today: NaiveDate) -> Result<SummaryStats>;
}
