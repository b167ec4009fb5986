use std::sync::Arc;

use async_trait::async_trait;
use chrono::Local;
use diesel::dsl::sum;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;

use pmajay_core::audit::NewAuditLog;
use pmajay_core::funds::{FundTransaction, FundTransactionRepositoryTrait, FundTransactionType};
use pmajay_core::{Error, Result};

use super::model::{FundTransactionDB, NewFundTransactionDB};
use crate::audit::insert_audit_log;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{fund_transactions, projects};

pub struct FundTransactionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl FundTransactionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        FundTransactionRepository { pool, writer }
    }
}

#[async_trait]
impl FundTransactionRepositoryTrait for FundTransactionRepository {
    fn list_transactions(&self, project_id: i32) -> Result<Vec<FundTransaction>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = fund_transactions::table
            .filter(fund_transactions::project_id.eq(project_id))
            .order((
                fund_transactions::transaction_date.desc(),
                fund_transactions::id.desc(),
            ))
            .select(FundTransactionDB::as_select())
            .load::<FundTransactionDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(FundTransaction::from).collect())
    }

    fn sum_by_type(&self, transaction_type: FundTransactionType) -> Result<f64> {
        let mut conn = get_connection(&self.pool)?;
        let total = fund_transactions::table
            .filter(fund_transactions::transaction_type.eq(transaction_type.as_str()))
            .select(sum(fund_transactions::amount))
            .first::<Option<f64>>(&mut conn)
            .into_core()?;
        Ok(total.unwrap_or(0.0))
    }

    async fn record_transaction(
        &self,
        project_id: i32,
        amount: f64,
        transaction_type: FundTransactionType,
        note: Option<String>,
        audit: NewAuditLog,
    ) -> Result<FundTransaction> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<FundTransaction> {
                let today = Local::now().date_naive();
                if transaction_type == FundTransactionType::Released {
                    let touched = diesel::update(projects::table.find(project_id))
                        .set(projects::budget_released.eq(projects::budget_released + amount))
                        .execute(conn)
                        .into_core()?;
                    if touched == 0 {
                        return Err(Error::not_found("Project", project_id));
                    }
                }

                let created = diesel::insert_into(fund_transactions::table)
                    .values(NewFundTransactionDB {
                        project_id,
                        amount,
                        transaction_date: today,
                        transaction_type: transaction_type.as_str().to_string(),
                        note,
                    })
                    .returning(FundTransactionDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                insert_audit_log(conn, audit)?;
                debug!(
                    "Recorded {} transaction {} on project {}",
                    transaction_type, created.id, project_id
                );
                Ok(FundTransaction::from(created))
            })
            .await
    }
}
