//! Audit trail of state-changing project operations.

mod audit_model;
mod audit_service;
mod audit_traits;

pub use audit_model::{AuditLog, AuditLogFilter, NewAuditLog};
pub use audit_service::AuditService;
pub use audit_traits::{AuditRepositoryTrait, AuditServiceTrait};
