//! SQLite storage implementation for inter-agency tasks.

mod model;
mod repository;

pub use model::{TaskDB, TaskRecordDB};
pub use repository::TaskRepository;
