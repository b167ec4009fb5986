use crate::audit::audit_model::{AuditLog, AuditLogFilter};
use crate::errors::Result;

/// Read access to the audit trail. Entries are written by the repositories
/// that perform the audited change, inside the same transaction.
pub trait AuditRepositoryTrait: Send + Sync {
    fn list_audit_logs(&self, filter: &AuditLogFilter) -> Result<Vec<AuditLog>>;
}

pub trait AuditServiceTrait: Send + Sync {
    fn get_audit_logs(&self, filter: &AuditLogFilter) -> Result<Vec<AuditLog>>;
}
