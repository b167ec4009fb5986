//! Database models for fund records.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use pmajay_core::fund_records::{FundRecord, ValidFundRecord};

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::fund_records)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct FundRecordDB {
    pub id: i32,
    pub component: String,
    pub state: String,
    pub amount_allocated: f64,
    pub amount_used: f64,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::fund_records)]
pub struct FundRecordWriteDB {
    pub component: String,
    pub state: String,
    pub amount_allocated: f64,
    pub amount_used: f64,
    pub status: String,
    pub updated_at: NaiveDateTime,
}

impl From<FundRecordDB> for FundRecord {
    fn from(db: FundRecordDB) -> Self {
        Self {
            id: db.id,
            component: db.component,
            state: db.state,
            amount_allocated: db.amount_allocated,
            amount_used: db.amount_used,
            status: db.status.parse().unwrap_or_default(),
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl FundRecordWriteDB {
    pub fn new(record: ValidFundRecord, updated_at: NaiveDateTime) -> Self {
        Self {
            component: record.component,
            state: record.state,
            amount_allocated: record.amount_allocated,
            amount_used: record.amount_used,
            status: record.status.as_str().to_string(),
            updated_at,
        }
    }
}
