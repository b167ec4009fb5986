//! SQLite storage implementation for agencies.

mod model;
mod repository;

pub use model::{AgencyDB, NewAgencyDB};
pub use repository::AgencyRepository;
