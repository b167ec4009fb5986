use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuditLog {
    pub id: i32,
    pub user_id: Option<i32>,
    pub action: String,
    pub entity_type: String,
    pub entity_id: Option<i32>,
    pub metadata: Option<Value>,
    pub created_at: NaiveDateTime,
}

/// An audit entry to be written alongside the change it describes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewAuditLog {
    pub user_id: Option<i32>,
    pub action: String,
    pub entity_type: String,
    pub entity_id: Option<i32>,
    pub metadata: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditLogFilter {
    pub entity_type: Option<String>,
    pub entity_id: Option<i32>,
    pub limit: Option<i64>,
}
