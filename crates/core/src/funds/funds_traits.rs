use crate::audit::NewAuditLog;
use crate::errors::Result;
use crate::funds::funds_model::{FundTransaction, FundTransactionType};
use async_trait::async_trait;

/// Trait for fund transaction repository operations
#[async_trait]
pub trait FundTransactionRepositoryTrait: Send + Sync {
    /// Transactions of one project, newest transaction date first.
    fn list_transactions(&self, project_id: i32) -> Result<Vec<FundTransaction>>;

    /// Sum of all transactions of the given type across projects.
    fn sum_by_type(&self, transaction_type: FundTransactionType) -> Result<f64>;

    /// Inserts the transaction, bumps the project's released budget for
    /// `released` entries, and writes the audit entry, atomically.
    async fn record_transaction(
        &self,
        project_id: i32,
        amount: f64,
        transaction_type: FundTransactionType,
        note: Option<String>,
        audit: NewAuditLog,
    ) -> Result<FundTransaction>;
}
