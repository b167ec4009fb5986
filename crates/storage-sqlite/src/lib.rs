//! SQLite storage implementation for the PM-AJAY scheme tracker.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `pmajay-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//! - Sample data seeding for a fresh database
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! The core crate is database-agnostic and works with traits.
//!
//! ```text
//!          core (domain)
//!                  │
//!                  ▼
//!          storage-sqlite (this crate)
//!                  │
//!                  ▼
//!              SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;
pub mod seed;

// Repository implementations
pub mod agencies;
pub mod audit;
pub mod dashboard;
pub mod fund_records;
pub mod funds;
pub mod projects;
pub mod reports;
pub mod states;
pub mod tasks;
pub mod users;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, ping, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use seed::seed_sample_data;

// Re-export from pmajay-core for convenience
pub use pmajay_core::errors::{DatabaseError, Error, Result};
