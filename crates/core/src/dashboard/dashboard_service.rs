use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;

use crate::agencies::{AgencyFilter, AgencyRepositoryTrait};
use crate::dashboard::calculations::{count_sla_breaches, average, round2, utilization_rate};
use crate::dashboard::csv_export::write_state_report;
use crate::dashboard::dashboard_model::{
    CentralDashboard, PublicDashboard, StateDashboard, SummaryStats,
};
use crate::dashboard::dashboard_traits::{DashboardRepositoryTrait, DashboardServiceTrait};
use crate::errors::{Error, Result};
use crate::funds::{FundTransactionRepositoryTrait, FundTransactionType};
use crate::projects::ProjectRepositoryTrait;
use crate::states::StateRepositoryTrait;
use crate::tasks::{TaskRepositoryTrait, TaskStatus};
use crate::users::Actor;

pub struct DashboardService {
    dashboard_repo: Arc<dyn DashboardRepositoryTrait>,
    state_repo: Arc<dyn StateRepositoryTrait>,
    project_repo: Arc<dyn ProjectRepositoryTrait>,
    agency_repo: Arc<dyn AgencyRepositoryTrait>,
    task_repo: Arc<dyn TaskRepositoryTrait>,
    fund_repo: Arc<dyn FundTransactionRepositoryTrait>,
}

impl DashboardService {
    pub fn new(
        dashboard_repo: Arc<dyn DashboardRepositoryTrait>,
        state_repo: Arc<dyn StateRepositoryTrait>,
        project_repo: Arc<dyn ProjectRepositoryTrait>,
        agency_repo: Arc<dyn AgencyRepositoryTrait>,
        task_repo: Arc<dyn TaskRepositoryTrait>,
        fund_repo: Arc<dyn FundTransactionRepositoryTrait>,
    ) -> Self {
        DashboardService {
            dashboard_repo,
            state_repo,
            project_repo,
            agency_repo,
            task_repo,
            fund_repo,
        }
    }
}

impl DashboardServiceTrait for DashboardService {
    fn get_central_dashboard(&self, today: NaiveDate) -> Result<CentralDashboard> {
        let totals = self.dashboard_repo.project_totals(None)?;
        let samples = self.dashboard_repo.ongoing_progress_samples()?;
        let progress: Vec<f64> = samples
            .iter()
            .map(|s| f64::from(s.progress_percent))
            .collect();

        let state_wise_data = self
            .dashboard_repo
            .state_breakdown()?
            .into_iter()
            .map(|mut row| {
                row.avg_progress = round2(row.avg_progress);
                row
            })
            .collect();
        let component_wise_data = self
            .dashboard_repo
            .component_breakdown()?
            .into_iter()
            .map(|mut row| {
                row.progress = round2(row.progress);
                row
            })
            .collect();

        let dashboard = CentralDashboard {
            total_projects: totals.project_count,
            total_budget: totals.budget_total,
            budget_released: totals.budget_released,
            budget_utilized: self.fund_repo.sum_by_type(FundTransactionType::Utilized)?,
            utilization_rate: utilization_rate(totals.budget_released, totals.budget_total),
            avg_progress: average(&progress),
            slabr: count_sla_breaches(&samples, today),
            state_wise_data,
            component_wise_data,
        };
        debug!(
            "Central dashboard: {} projects, {} SLA breaches",
            dashboard.total_projects, dashboard.slabr
        );
        Ok(dashboard)
    }

    fn export_state_report(&self) -> Result<String> {
        let rows = self.dashboard_repo.state_breakdown()?;
        write_state_report(&rows)
    }

    fn get_state_dashboard(&self, actor: &Actor, state_id: i32) -> Result<StateDashboard> {
        actor.ensure_state_access(state_id)?;
        let state = self
            .state_repo
            .get_state(state_id)?
            .ok_or_else(|| Error::not_found("State", state_id))?;
        let totals = self.dashboard_repo.project_totals(Some(state_id))?;
        let agencies = self.agency_repo.list_agencies(&AgencyFilter {
            state_id: Some(state_id),
            ..Default::default()
        })?;
        Ok(StateDashboard {
            state,
            total_projects: totals.project_count,
            total_budget: totals.budget_total,
            budget_released: totals.budget_released,
            utilization_rate: utilization_rate(totals.budget_released, totals.budget_total),
            projects: self.project_repo.list_projects_by_state(state_id)?,
            agencies,
        })
    }

    fn get_public_dashboard(&self) -> Result<PublicDashboard> {
        let projects = self.project_repo.list_mapped_projects()?;
        let totals = self.dashboard_repo.project_totals(None)?;
        Ok(PublicDashboard {
            total_projects: projects.len(),
            total_budget: totals.budget_total,
            projects,
        })
    }

    fn get_summary_stats(&self, today: NaiveDate) -> Result<SummaryStats> {
        let totals = self.dashboard_repo.project_totals(None)?;
        let tasks = self.task_repo.list_tasks()?;
        let completed_tasks = tasks
            .iter()
            .filter(|t| t.effective_status(today) == TaskStatus::Completed)
            .count();
        Ok(SummaryStats {
            total_agencies: self.agency_repo.count_agencies()?,
            total_allocated: totals.budget_total,
            total_used: totals.budget_released,
            utilization_rate: utilization_rate(totals.budget_released, totals.budget_total),
            total_tasks: tasks.len(),
            completed_tasks,
            completion_rate: utilization_rate(completed_tasks as f64, tasks.len() as f64),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agencies::{Agency, AgencyStatus, AgencyType, NewAgency};
    use crate::audit::NewAuditLog;
    use crate::dashboard::{BudgetTotals, ComponentBreakdown, ProgressSample, StateBreakdown};
    use crate::funds::FundTransaction;
    use crate::projects::{
        Project, ProjectComponent, ProjectFilter, ProjectRecord, ProjectStatus, ProjectSummary,
    };
    use crate::states::{NewState, State};
    use crate::tasks::{Task, TaskPriority, TaskRecord};
    use crate::users::UserRole;
    use async_trait::async_trait;
    use chrono::NaiveDateTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ts() -> NaiveDateTime {
        date(2024, 1, 1).and_hms_opt(0, 0, 0).unwrap()
    }

    fn project(id: i32, state_id: i32, lat: Option<f64>) -> Project {
        Project {
            id,
            title: format!("Project {id}"),
            component: ProjectComponent::Gia,
            state_id,
            agency_ids: vec![],
            budget_total: 1000.0,
            budget_released: 250.0,
            start_date: date(2024, 1, 1),
            end_date: date(2024, 4, 10),
            status: ProjectStatus::Ongoing,
            latitude: lat,
            longitude: lat,
            progress_percent: 20,
            description: None,
            created_at: ts(),
            updated_at: ts(),
        }
    }

    fn task(id: i32, status: TaskStatus, deadline: Option<NaiveDate>) -> Task {
        Task {
            id,
            sender: "A".into(),
            receiver: "B".into(),
            title: format!("Task {id}"),
            description: None,
            deadline,
            priority: TaskPriority::Medium,
            status,
            created_at: ts(),
            updated_at: ts(),
        }
    }

    /// One in-memory fixture standing in for every repository the service reads.
    struct Fixture {
        projects: Vec<Project>,
        tasks: Vec<Task>,
    }

    impl Fixture {
        fn summary(&self, p: &Project) -> ProjectSummary {
            ProjectSummary {
                project: p.clone(),
                state_name: "Maharashtra".into(),
                state_code: "MH".into(),
            }
        }
    }

    impl DashboardRepositoryTrait for Fixture {
        fn project_totals(&self, state_id: Option<i32>) -> Result<BudgetTotals> {
            let rows: Vec<&Project> = self
                .projects
                .iter()
                .filter(|p| state_id.map_or(true, |id| p.state_id == id))
                .collect();
            Ok(BudgetTotals {
                project_count: rows.len() as i64,
                budget_total: rows.iter().map(|p| p.budget_total).sum(),
                budget_released: rows.iter().map(|p| p.budget_released).sum(),
            })
        }

        fn ongoing_progress_samples(&self) -> Result<Vec<ProgressSample>> {
            Ok(self
                .projects
                .iter()
                .filter(|p| p.status == ProjectStatus::Ongoing)
                .map(|p| ProgressSample {
                    project_id: p.id,
                    progress_percent: p.progress_percent,
                    start_date: p.start_date,
                    end_date: p.end_date,
                })
                .collect())
        }

        fn state_breakdown(&self) -> Result<Vec<StateBreakdown>> {
            Ok(vec![
                StateBreakdown {
                    name: "Maharashtra".into(),
                    code: "MH".into(),
                    project_count: 2,
                    total_budget: 2000.0,
                    avg_progress: 33.3333,
                },
                StateBreakdown {
                    name: "Delhi".into(),
                    code: "DL".into(),
                    project_count: 0,
                    total_budget: 0.0,
                    avg_progress: 0.0,
                },
            ])
        }

        fn component_breakdown(&self) -> Result<Vec<ComponentBreakdown>> {
            Ok(vec![ComponentBreakdown {
                component: "GIA".into(),
                count: 2,
                budget: 2000.0,
                progress: 16.666,
            }])
        }
    }

    #[async_trait]
    impl StateRepositoryTrait for Fixture {
        fn list_states(&self) -> Result<Vec<State>> {
            Ok(vec![])
        }
        fn get_state(&self, state_id: i32) -> Result<Option<State>> {
            Ok((state_id == 1).then(|| State {
                id: 1,
                name: "Maharashtra".into(),
                code: "MH".into(),
                created_at: ts(),
            }))
        }
        async fn insert_state(&self, _new_state: NewState) -> Result<State> {
            unimplemented!()
        }
    }

    #[async_trait]
    impl ProjectRepositoryTrait for Fixture {
        fn list_projects(&self, _filter: &ProjectFilter) -> Result<Vec<ProjectSummary>> {
            Ok(self.projects.iter().map(|p| self.summary(p)).collect())
        }
        fn get_project(&self, project_id: i32) -> Result<Option<ProjectSummary>> {
            Ok(self
                .projects
                .iter()
                .find(|p| p.id == project_id)
                .map(|p| self.summary(p)))
        }
        fn list_projects_by_state(&self, state_id: i32) -> Result<Vec<Project>> {
            Ok(self
                .projects
                .iter()
                .filter(|p| p.state_id == state_id)
                .cloned()
                .collect())
        }
        fn list_mapped_projects(&self) -> Result<Vec<ProjectSummary>> {
            Ok(self
                .projects
                .iter()
                .filter(|p| p.has_coordinates())
                .map(|p| self.summary(p))
                .collect())
        }
        async fn insert_project(&self, _record: ProjectRecord) -> Result<Project> {
            unimplemented!()
        }
        async fn update_progress(
            &self,
            _project_id: i32,
            _progress_percent: i32,
            _audit: NewAuditLog,
        ) -> Result<usize> {
            unimplemented!()
        }
    }

    #[async_trait]
    impl AgencyRepositoryTrait for Fixture {
        fn list_agencies(&self, filter: &AgencyFilter) -> Result<Vec<Agency>> {
            let agency = Agency {
                id: 1,
                name: "Maharashtra Rural Development".into(),
                agency_type: AgencyType::Implementing,
                contact: None,
                location: None,
                state_id: Some(1),
                roles: None,
                status: AgencyStatus::Active,
                created_at: ts(),
            };
            Ok(if filter.state_id == Some(1) {
                vec![agency]
            } else {
                vec![]
            })
        }
        fn get_agency(&self, _agency_id: i32) -> Result<Option<Agency>> {
            Ok(None)
        }
        fn count_agencies(&self) -> Result<i64> {
            Ok(4)
        }
        async fn insert_agency(&self, _new_agency: NewAgency) -> Result<Agency> {
            unimplemented!()
        }
        async fn update_agency(&self, _agency_id: i32, _update: NewAgency) -> Result<Agency> {
            unimplemented!()
        }
        async fn delete_agency(&self, _agency_id: i32) -> Result<usize> {
            unimplemented!()
        }
    }

    #[async_trait]
    impl TaskRepositoryTrait for Fixture {
        fn list_tasks(&self) -> Result<Vec<Task>> {
            Ok(self.tasks.clone())
        }
        fn get_task(&self, _task_id: i32) -> Result<Option<Task>> {
            Ok(None)
        }
        async fn insert_task(&self, _record: TaskRecord) -> Result<Task> {
            unimplemented!()
        }
        async fn update_task(&self, _task_id: i32, _record: TaskRecord) -> Result<Task> {
            unimplemented!()
        }
        async fn delete_task(&self, _task_id: i32) -> Result<usize> {
            unimplemented!()
        }
    }

    #[async_trait]
    impl FundTransactionRepositoryTrait for Fixture {
        fn list_transactions(&self, _project_id: i32) -> Result<Vec<FundTransaction>> {
            Ok(vec![])
        }
        fn sum_by_type(&self, transaction_type: FundTransactionType) -> Result<f64> {
            Ok(match transaction_type {
                FundTransactionType::Utilized => 120.0,
                _ => 0.0,
            })
        }
        async fn record_transaction(
            &self,
            _project_id: i32,
            _amount: f64,
            _transaction_type: FundTransactionType,
            _note: Option<String>,
            _audit: NewAuditLog,
        ) -> Result<FundTransaction> {
            unimplemented!()
        }
    }

    fn service(fixture: Fixture) -> DashboardService {
        let f = Arc::new(fixture);
        DashboardService::new(f.clone(), f.clone(), f.clone(), f.clone(), f.clone(), f)
    }

    fn actor(role: UserRole, state_id: Option<i32>) -> Actor {
        Actor {
            user_id: 9,
            email: "someone@pmajay.gov.in".into(),
            role,
            state_id,
        }
    }

    #[test]
    fn central_dashboard_aggregates() {
        let mut behind = project(1, 1, Some(18.5));
        behind.progress_percent = 20;
        let mut on_track = project(2, 1, None);
        on_track.progress_percent = 60;
        let svc = service(Fixture {
            projects: vec![behind, on_track],
            tasks: vec![],
        });

        // 2024-02-20 is day 50 of 100: expected progress 50.
        let dash = svc.get_central_dashboard(date(2024, 2, 20)).unwrap();
        assert_eq!(dash.total_projects, 2);
        assert_eq!(dash.total_budget, 2000.0);
        assert_eq!(dash.budget_released, 500.0);
        assert_eq!(dash.budget_utilized, 120.0);
        assert_eq!(dash.utilization_rate, 25.0);
        assert_eq!(dash.avg_progress, 40.0);
        assert_eq!(dash.slabr, 1);
        assert_eq!(dash.state_wise_data[0].avg_progress, 33.33);
        assert_eq!(dash.state_wise_data.len(), 2);
        assert_eq!(dash.component_wise_data[0].progress, 16.67);

        let json = serde_json::to_value(&dash).unwrap();
        assert!(json.get("totalProjects").is_some());
        assert!(json.get("stateWiseData").is_some());
        assert_eq!(json["stateWiseData"][0]["project_count"], 2);
    }

    #[test]
    fn empty_portfolio_yields_zero_rates() {
        let svc = service(Fixture {
            projects: vec![],
            tasks: vec![],
        });
        let dash = svc.get_central_dashboard(date(2024, 2, 20)).unwrap();
        assert_eq!(dash.utilization_rate, 0.0);
        assert_eq!(dash.avg_progress, 0.0);
        assert_eq!(dash.slabr, 0);
    }

    #[test]
    fn state_dashboard_respects_officer_scope() {
        let svc = service(Fixture {
            projects: vec![project(1, 1, None), project(2, 2, None)],
            tasks: vec![],
        });

        let own = svc
            .get_state_dashboard(&actor(UserRole::StateUser, Some(1)), 1)
            .unwrap();
        assert_eq!(own.total_projects, 1);
        assert_eq!(own.projects.len(), 1);
        assert_eq!(own.agencies.len(), 1);
        assert_eq!(own.utilization_rate, 25.0);

        let err = svc
            .get_state_dashboard(&actor(UserRole::StateUser, Some(1)), 2)
            .unwrap_err();
        assert!(matches!(err, Error::Forbidden(_)));

        let missing = svc
            .get_state_dashboard(&actor(UserRole::Central, None), 42)
            .unwrap_err();
        assert!(missing.is_not_found());
    }

    #[test]
    fn public_dashboard_counts_mapped_projects_only() {
        let svc = service(Fixture {
            projects: vec![project(1, 1, Some(18.5)), project(2, 1, None)],
            tasks: vec![],
        });
        let public = svc.get_public_dashboard().unwrap();
        assert_eq!(public.total_projects, 1);
        assert_eq!(public.total_budget, 2000.0);
        assert_eq!(public.projects[0].state_code, "MH");
    }

    #[test]
    fn summary_stats_count_completed_tasks() {
        let today = date(2024, 6, 1);
        let svc = service(Fixture {
            projects: vec![project(1, 1, None)],
            tasks: vec![
                task(1, TaskStatus::Completed, Some(date(2024, 5, 1))),
                task(2, TaskStatus::Pending, Some(date(2024, 5, 1))),
                task(3, TaskStatus::InProgress, None),
            ],
        });
        let stats = svc.get_summary_stats(today).unwrap();
        assert_eq!(stats.total_agencies, 4);
        assert_eq!(stats.total_allocated, 1000.0);
        assert_eq!(stats.total_used, 250.0);
        assert_eq!(stats.utilization_rate, 25.0);
        assert_eq!(stats.total_tasks, 3);
        assert_eq!(stats.completed_tasks, 1);
        assert_eq!(stats.completion_rate, 33.33);
    }

    #[test]
    fn export_uses_state_breakdown() {
        let svc = service(Fixture {
            projects: vec![],
            tasks: vec![],
        });
        let csv = svc.export_state_report().unwrap();
        assert!(csv.starts_with("State,Projects,Budget,Progress\n"));
        assert!(csv.contains("Maharashtra,2,2000,33.33"));
    }
}
