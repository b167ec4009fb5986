//! Row types for the aggregate queries.

use diesel::prelude::*;
use diesel::sql_types::{BigInt, Double, Text};

use pmajay_core::dashboard::{ComponentBreakdown, StateBreakdown};

#[derive(QueryableByName, Debug, Clone)]
pub struct StateBreakdownRow {
    #[diesel(sql_type = Text)]
    pub name: String,
    #[diesel(sql_type = Text)]
    pub code: String,
    #[diesel(sql_type = BigInt)]
    pub project_count: i64,
    #[diesel(sql_type = Double)]
    pub total_budget: f64,
    #[diesel(sql_type = Double)]
    pub avg_progress: f64,
}

#[derive(QueryableByName, Debug, Clone)]
pub struct ComponentBreakdownRow {
    #[diesel(sql_type = Text)]
    pub component: String,
    #[diesel(sql_type = BigInt)]
    pub count: i64,
    #[diesel(sql_type = Double)]
    pub budget: f64,
    #[diesel(sql_type = Double)]
    pub progress: f64,
}

impl From<StateBreakdownRow> for StateBreakdown {
    fn from(row: StateBreakdownRow) -> Self {
        Self {
            name: row.name,
            code: row.code,
            project_count: row.project_count,
            total_budget: row.total_budget,
            avg_progress: row.avg_progress,
        }
    }
}

impl From<ComponentBreakdownRow> for ComponentBreakdown {
    fn from(row: ComponentBreakdownRow) -> Self {
        Self {
            component: row.component,
            count: row.count,
            budget: row.budget,
            progress: row.progress,
        }
    }
}
