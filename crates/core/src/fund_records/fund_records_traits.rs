use crate::errors::Result;
use crate::fund_records::fund_records_model::{
    FundRecord, FundRecordInput, FundRecordView, ValidFundRecord,
};
use async_trait::async_trait;

/// Trait for fund record repository operations
#[async_trait]
pub trait FundRecordRepositoryTrait: Send + Sync {
    fn list_fund_records(&self) -> Result<Vec<FundRecord>>;
    fn get_fund_record(&self, record_id: i32) -> Result<Option<FundRecord>>;
    async fn insert_fund_record(&self, record: ValidFundRecord) -> Result<FundRecord>;
    async fn update_fund_record(&self, record_id: i32, record: ValidFundRecord)
        -> Result<FundRecord>;
    async fn delete_fund_record(&self, record_id: i32) -> Result<usize>;
}

/// Trait for fund record service operations
#[async_trait]
pub trait FundRecordServiceTrait: Send + Sync {
    fn get_fund_records(&self) -> Result<Vec<FundRecordView>>;
    async fn create_fund_record(&self, input: FundRecordInput) -> Result<FundRecordView>;
    async fn update_fund_record(
        &self,
        record_id: i32,
        input: FundRecordInput,
    ) -> Result<FundRecordView>;
    async fn delete_fund_record(&self, record_id: i32) -> Result<()>;
}
