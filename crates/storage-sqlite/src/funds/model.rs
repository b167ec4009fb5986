//! Database models for fund transactions.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use pmajay_core::funds::FundTransaction;

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::fund_transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct FundTransactionDB {
    pub id: i32,
    pub project_id: i32,
    pub amount: f64,
    pub transaction_date: NaiveDate,
    pub transaction_type: String,
    pub note: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::fund_transactions)]
pub struct NewFundTransactionDB {
    pub project_id: i32,
    pub amount: f64,
    pub transaction_date: NaiveDate,
    pub transaction_type: String,
    pub note: Option<String>,
}

impl From<FundTransactionDB> for FundTransaction {
    fn from(db: FundTransactionDB) -> Self {
        Self {
            id: db.id,
            project_id: db.project_id,
            amount: db.amount,
            transaction_date: db.transaction_date,
            transaction_type: db.transaction_type.parse().unwrap_or_default(),
            note: db.note,
            created_at: db.created_at,
        }
    }
}
