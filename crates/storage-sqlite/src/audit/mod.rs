//! SQLite storage implementation for the audit trail.

mod model;
mod repository;

pub(crate) use model::insert_audit_log;
pub use model::{AuditLogDB, NewAuditLogDB};
pub use repository::AuditRepository;
