//! SQLite storage implementation for states.

mod model;
mod repository;

pub use model::{NewStateDB, StateDB};
pub use repository::StateRepository;
