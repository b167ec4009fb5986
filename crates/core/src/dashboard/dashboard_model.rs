use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::agencies::Agency;
use crate::projects::{Project, ProjectSummary};
use crate::states::State;

/// Project count and budget sums, over all projects or one state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BudgetTotals {
    pub project_count: i64,
    pub budget_total: f64,
    pub budget_released: f64,
}

/// What the SLA check needs from an ongoing project.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSample {
    pub project_id: i32,
    pub progress_percent: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StateBreakdown {
    pub name: String,
    pub code: String,
    pub project_count: i64,
    pub total_budget: f64,
    pub avg_progress: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComponentBreakdown {
    pub component: String,
    pub count: i64,
    pub budget: f64,
    pub progress: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CentralDashboard {
    pub total_projects: i64,
    pub total_budget: f64,
    pub budget_released: f64,
    pub budget_utilized: f64,
    pub utilization_rate: f64,
    pub avg_progress: f64,
    pub slabr: usize,
    pub state_wise_data: Vec<StateBreakdown>,
    pub component_wise_data: Vec<ComponentBreakdown>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StateDashboard {
    pub state: State,
    pub total_projects: i64,
    pub total_budget: f64,
    pub budget_released: f64,
    pub utilization_rate: f64,
    pub projects: Vec<Project>,
    pub agencies: Vec<Agency>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PublicDashboard {
    pub projects: Vec<ProjectSummary>,
    pub total_budget: f64,
    pub total_projects: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_agencies: i64,
    pub total_allocated: f64,
    pub total_used: f64,
    pub utilization_rate: f64,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub completion_rate: f64,
}
