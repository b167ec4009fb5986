use std::sync::Arc;

use chrono::NaiveDate;
use diesel::dsl::{count_star, sum};
use diesel::prelude::*;
use diesel::sql_query;

use pmajay_core::dashboard::{
    BudgetTotals, ComponentBreakdown, DashboardRepositoryTrait, ProgressSample, StateBreakdown,
};
use pmajay_core::projects::ProjectStatus;
use pmajay_core::Result;

use super::model::{ComponentBreakdownRow, StateBreakdownRow};
use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::projects;

const STATE_BREAKDOWN_SQL: &str = "\
    SELECT s.name AS name, s.code AS code, \
           COUNT(p.id) AS project_count, \
           COALESCE(SUM(p.budget_total), 0.0) AS total_budget, \
           COALESCE(AVG(p.progress_percent), 0.0) AS avg_progress \
    FROM states s \
    LEFT JOIN projects p ON p.state_id = s.id \
    GROUP BY s.id, s.name, s.code \
    ORDER BY project_count DESC, s.name ASC";

const COMPONENT_BREAKDOWN_SQL: &str = "\
    SELECT component, \
           COUNT(*) AS count, \
           COALESCE(SUM(budget_total), 0.0) AS budget, \
           COALESCE(AVG(progress_percent), 0.0) AS progress \
    FROM projects \
    GROUP BY component \
    ORDER BY component ASC";

pub struct DashboardRepository {
    pool: Arc<DbPool>,
}

impl DashboardRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        DashboardRepository { pool }
    }
}

impl DashboardRepositoryTrait for DashboardRepository {
    fn project_totals(&self, state_id: Option<i32>) -> Result<BudgetTotals> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = projects::table
            .select((
                count_star(),
                sum(projects::budget_total),
                sum(projects::budget_released),
            ))
            .into_boxed();
        if let Some(state_id) = state_id {
            query = query.filter(projects::state_id.eq(state_id));
        }
        let (project_count, budget_total, budget_released) = query
            .first::<(i64, Option<f64>, Option<f64>)>(&mut conn)
            .into_core()?;
        Ok(BudgetTotals {
            project_count,
            budget_total: budget_total.unwrap_or(0.0),
            budget_released: budget_released.unwrap_or(0.0),
        })
    }

    fn ongoing_progress_samples(&self) -> Result<Vec<ProgressSample>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = projects::table
            .filter(projects::status.eq(ProjectStatus::Ongoing.as_str()))
            .select((
                projects::id,
                projects::progress_percent,
                projects::start_date,
                projects::end_date,
            ))
            .load::<(i32, i32, NaiveDate, NaiveDate)>(&mut conn)
            .into_core()?;
        Ok(rows
            .into_iter()
            .map(
                |(project_id, progress_percent, start_date, end_date)| ProgressSample {
                    project_id,
                    progress_percent,
                    start_date,
                    end_date,
                },
            )
            .collect())
    }

    fn state_breakdown(&self) -> Result<Vec<StateBreakdown>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = sql_query(STATE_BREAKDOWN_SQL)
            .load::<StateBreakdownRow>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(StateBreakdown::from).collect())
    }

    fn component_breakdown(&self) -> Result<Vec<ComponentBreakdown>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = sql_query(COMPONENT_BREAKDOWN_SQL)
            .load::<ComponentBreakdownRow>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(ComponentBreakdown::from).collect())
    }
}
