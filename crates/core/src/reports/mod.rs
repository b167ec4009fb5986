//! Progress reports uploaded against projects.

mod reports_model;
mod reports_service;
mod reports_traits;

pub use reports_model::{sanitize_file_name, NewReport, Report};
pub use reports_service::ReportService;
pub use reports_traits::{ReportRepositoryTrait, ReportServiceTrait};
