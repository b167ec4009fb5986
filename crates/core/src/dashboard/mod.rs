//! Read-only aggregate views over projects, funds and tasks.

mod calculations;
mod csv_export;
mod dashboard_model;
mod dashboard_service;
mod dashboard_traits;

pub use calculations::{
    average, count_sla_breaches, expected_progress, is_sla_breach, round2, utilization_rate,
};
pub use csv_export::write_state_report;
pub use dashboard_model::{
    BudgetTotals, CentralDashboard, ComponentBreakdown, ProgressSample, PublicDashboard,
    StateBreakdown, StateDashboard, SummaryStats,
};
pub use dashboard_service::DashboardService;
pub use dashboard_traits::{DashboardRepositoryTrait, DashboardServiceTrait};
