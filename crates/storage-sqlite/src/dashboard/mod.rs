//! Aggregate queries behind the dashboards.

mod model;
mod repository;

pub use model::{ComponentBreakdownRow, StateBreakdownRow};
pub use repository::DashboardRepository;
