use std::sync::Arc;

use diesel::prelude::*;

use pmajay_core::audit::{AuditLog, AuditLogFilter, AuditRepositoryTrait};
use pmajay_core::Result;

use super::model::AuditLogDB;
use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::audit_logs;

/// Read side of the audit trail. Entries are written by the project and fund
/// repositories inside their own transactions.
pub struct AuditRepository {
    pool: Arc<DbPool>,
}

impl AuditRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        AuditRepository { pool }
    }
}

impl AuditRepositoryTrait for AuditRepository {
    fn list_audit_logs(&self, filter: &AuditLogFilter) -> Result<Vec<AuditLog>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = audit_logs::table.into_boxed();
        if let Some(entity_type) = &filter.entity_type {
            query = query.filter(audit_logs::entity_type.eq(entity_type.clone()));
        }
        if let Some(entity_id) = filter.entity_id {
            query = query.filter(audit_logs::entity_id.eq(entity_id));
        }
        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }
        let rows = query
            .order((audit_logs::created_at.desc(), audit_logs::id.desc()))
            .select(AuditLogDB::as_select())
            .load::<AuditLogDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(AuditLog::from).collect())
    }
}
