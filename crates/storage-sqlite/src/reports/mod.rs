//! SQLite storage implementation for uploaded reports.

mod model;
mod repository;

pub use model::{NewReportDB, ReportDB};
pub use repository::ReportRepository;
