//! Database models for audit entries.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::SqliteConnection;

use pmajay_core::audit::{AuditLog, NewAuditLog};
use pmajay_core::Result;

use crate::errors::{IntoCore, StorageError};
use crate::schema::audit_logs;

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::audit_logs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AuditLogDB {
    pub id: i32,
    pub user_id: Option<i32>,
    pub action: String,
    pub entity_type: String,
    pub entity_id: Option<i32>,
    pub metadata: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::audit_logs)]
pub struct NewAuditLogDB {
    pub user_id: Option<i32>,
    pub action: String,
    pub entity_type: String,
    pub entity_id: Option<i32>,
    pub metadata: Option<String>,
}

impl From<AuditLogDB> for AuditLog {
    fn from(db: AuditLogDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            action: db.action,
            entity_type: db.entity_type,
            entity_id: db.entity_id,
            metadata: db
                .metadata
                .as_deref()
                .and_then(|raw| serde_json::from_str(raw).ok()),
            created_at: db.created_at,
        }
    }
}

impl TryFrom<NewAuditLog> for NewAuditLogDB {
    type Error = StorageError;

    fn try_from(domain: NewAuditLog) -> std::result::Result<Self, Self::Error> {
        let metadata = domain
            .metadata
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;
        Ok(Self {
            user_id: domain.user_id,
            action: domain.action,
            entity_type: domain.entity_type,
            entity_id: domain.entity_id,
            metadata,
        })
    }
}

/// Writes an audit entry on the caller's connection, so it commits or rolls
/// back together with the change it records.
pub(crate) fn insert_audit_log(conn: &mut SqliteConnection, entry: NewAuditLog) -> Result<()> {
    let row = NewAuditLogDB::try_from(entry)?;
    diesel::insert_into(audit_logs::table)
        .values(row)
        .execute(conn)
        .into_core()?;
    Ok(())
}
