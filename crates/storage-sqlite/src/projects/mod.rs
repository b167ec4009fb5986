//! SQLite storage implementation for projects.

mod model;
mod repository;

pub use model::{NewProjectDB, ProjectDB};
pub use repository::ProjectRepository;
