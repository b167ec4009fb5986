//! Projects module - scheme projects, progress updates, and fund postings.

mod projects_model;
mod projects_service;
mod projects_traits;

pub(crate) use projects_model::check_progress;
pub use projects_model::{
    NewProject, ProgressUpdate, Project, ProjectComponent, ProjectDetail, ProjectFilter,
    ProjectRecord, ProjectStatus, ProjectSummary,
};
pub use projects_service::ProjectService;
pub use projects_traits::{ProjectRepositoryTrait, ProjectServiceTrait};
