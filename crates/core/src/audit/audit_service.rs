use crate::audit::audit_model::{AuditLog, AuditLogFilter};
use crate::audit::audit_traits::{AuditRepositoryTrait, AuditServiceTrait};
use crate::errors::Result;
use std::sync::Arc;

const DEFAULT_LIMIT: i64 = 200;
const MAX_LIMIT: i64 = 1000;

pub struct AuditService<T: AuditRepositoryTrait> {
    audit_repo: Arc<T>,
}

impl<T: AuditRepositoryTrait> AuditService<T> {
    pub fn new(audit_repo: Arc<T>) -> Self {
        AuditService { audit_repo }
    }
}

impl<T: AuditRepositoryTrait> AuditServiceTrait for AuditService<T> {
    fn get_audit_logs(&self, filter: &AuditLogFilter) -> Result<Vec<AuditLog>> {
        let mut filter = filter.clone();
        filter.limit = Some(filter.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT));
        self.audit_repo.list_audit_logs(&filter)
    }
}
