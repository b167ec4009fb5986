use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use pmajay_core::fund_records::{FundRecord, FundRecordRepositoryTrait, ValidFundRecord};
use pmajay_core::Result;

use super::model::{FundRecordDB, FundRecordWriteDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::fund_records;

pub struct FundRecordRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl FundRecordRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        FundRecordRepository { pool, writer }
    }
}

#[async_trait]
impl FundRecordRepositoryTrait for FundRecordRepository {
    fn list_fund_records(&self) -> Result<Vec<FundRecord>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = fund_records::table
            .order((fund_records::created_at.desc(), fund_records::id.desc()))
            .select(FundRecordDB::as_select())
            .load::<FundRecordDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(FundRecord::from).collect())
    }

    fn get_fund_record(&self, record_id: i32) -> Result<Option<FundRecord>> {
        let mut conn = get_connection(&self.pool)?;
        let row = fund_records::table
            .find(record_id)
            .select(FundRecordDB::as_select())
            .first::<FundRecordDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(row.map(FundRecord::from))
    }

    async fn insert_fund_record(&self, record: ValidFundRecord) -> Result<FundRecord> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<FundRecord> {
                let row = diesel::insert_into(fund_records::table)
                    .values(FundRecordWriteDB::new(record, Utc::now().naive_utc()))
                    .returning(FundRecordDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(FundRecord::from(row))
            })
            .await
    }

    async fn update_fund_record(
        &self,
        record_id: i32,
        record: ValidFundRecord,
    ) -> Result<FundRecord> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<FundRecord> {
                let row = diesel::update(fund_records::table.find(record_id))
                    .set(FundRecordWriteDB::new(record, Utc::now().naive_utc()))
                    .returning(FundRecordDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(FundRecord::from(row))
            })
            .await
    }

    async fn delete_fund_record(&self, record_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(fund_records::table.find(record_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
