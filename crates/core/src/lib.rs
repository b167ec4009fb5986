//! PM-AJAY Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for the scheme tracker.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod agencies;
pub mod audit;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod fund_records;
pub mod funds;
pub mod projects;
pub mod reports;
pub mod states;
pub mod tasks;
pub mod users;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
