use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::errors::{Error, Result};
use crate::fund_records::fund_records_model::{FundRecordInput, FundRecordView};
use crate::fund_records::fund_records_traits::{
    FundRecordRepositoryTrait, FundRecordServiceTrait,
};

pub struct FundRecordService<T: FundRecordRepositoryTrait> {
    fund_record_repo: Arc<T>,
}

impl<T: FundRecordRepositoryTrait> FundRecordService<T> {
    pub fn new(fund_record_repo: Arc<T>) -> Self {
        FundRecordService { fund_record_repo }
    }
}

#[async_trait]
impl<T: FundRecordRepositoryTrait + Send + Sync> FundRecordServiceTrait for FundRecordService<T> {
    fn get_fund_records(&self) -> Result<Vec<FundRecordView>> {
        Ok(self
            .fund_record_repo
            .list_fund_records()?
            .into_iter()
            .map(FundRecordView::from)
            .collect())
    }

    async fn create_fund_record(&self, input: FundRecordInput) -> Result<FundRecordView> {
        let record = input.validate()?;
        let created = self.fund_record_repo.insert_fund_record(record).await?;
        debug!("Created fund record {}", created.id);
        Ok(created.into())
    }

    async fn update_fund_record(
        &self,
        record_id: i32,
        input: FundRecordInput,
    ) -> Result<FundRecordView> {
        let record = input.validate()?;
        if self.fund_record_repo.get_fund_record(record_id)?.is_none() {
            return Err(Error::not_found("Fund record", record_id));
        }
        Ok(self
            .fund_record_repo
            .update_fund_record(record_id, record)
            .await?
            .into())
    }

    async fn delete_fund_record(&self, record_id: i32) -> Result<()> {
        match self.fund_record_repo.delete_fund_record(record_id).await? {
            0 => Err(Error::not_found("Fund record", record_id)),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fund_records::{FundRecord, ValidFundRecord};
    use chrono::NaiveDate;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockFundRecordRepository {
        records: Mutex<Vec<FundRecord>>,
    }

    fn materialize(id: i32, r: ValidFundRecord) -> FundRecord {
        let ts = NaiveDate::from_ymd_opt(2024, 2, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        FundRecord {
            id,
            component: r.component,
            state: r.state,
            amount_allocated: r.amount_allocated,
            amount_used: r.amount_used,
            status: r.status,
            created_at: ts,
            updated_at: ts,
        }
    }

    #[async_trait]
    impl FundRecordRepositoryTrait for MockFundRecordRepository {
        fn list_fund_records(&self) -> Result<Vec<FundRecord>> {
            Ok(self.records.lock().unwrap().clone())
        }

        fn get_fund_record(&self, record_id: i32) -> Result<Option<FundRecord>> {
            Ok(self
                .records
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.id == record_id)
                .cloned())
        }

        async fn insert_fund_record(&self, record: ValidFundRecord) -> Result<FundRecord> {
            let mut records = self.records.lock().unwrap();
            let created = materialize(records.len() as i32 + 1, record);
            records.push(created.clone());
            Ok(created)
        }

        async fn update_fund_record(
            &self,
            record_id: i32,
            record: ValidFundRecord,
        ) -> Result<FundRecord> {
            let mut records = self.records.lock().unwrap();
            let slot = records
                .iter_mut()
                .find(|r| r.id == record_id)
                .ok_or_else(|| Error::not_found("Fund record", record_id))?;
            *slot = materialize(record_id, record);
            Ok(slot.clone())
        }

        async fn delete_fund_record(&self, record_id: i32) -> Result<usize> {
            let mut records = self.records.lock().unwrap();
            let before = records.len();
            records.retain(|r| r.id != record_id);
            Ok(before - records.len())
        }
    }

    fn input(allocated: f64, used: f64) -> FundRecordInput {
        FundRecordInput {
            component: "AdarshGram".to_string(),
            state: "Maharashtra".to_string(),
            amount_allocated: allocated,
            amount_used: Some(used),
            status: None,
        }
    }

    #[tokio::test]
    async fn create_then_update_recomputes_rate() {
        let svc = FundRecordService::new(Arc::new(MockFundRecordRepository::default()));
        let created = svc.create_fund_record(input(1000.0, 250.0)).await.unwrap();
        assert_eq!(created.utilization_rate, 25.0);

        let updated = svc
            .update_fund_record(created.record.id, input(1000.0, 900.0))
            .await
            .unwrap();
        assert_eq!(updated.utilization_rate, 90.0);
        assert_eq!(svc.get_fund_records().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn missing_record_is_not_found() {
        let svc = FundRecordService::new(Arc::new(MockFundRecordRepository::default()));
        assert!(svc
            .update_fund_record(7, input(1.0, 0.0))
            .await
            .unwrap_err()
            .is_not_found());
        assert!(svc.delete_fund_record(7).await.unwrap_err().is_not_found());
    }
}
