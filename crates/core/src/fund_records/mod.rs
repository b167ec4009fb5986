//! Fund records - the unversioned API's per-component fund ledger.

mod fund_records_model;
mod fund_records_service;
mod fund_records_traits;

pub use fund_records_model::{
    FundRecord, FundRecordInput, FundRecordStatus, FundRecordView, ValidFundRecord,
};
pub use fund_records_service::FundRecordService;
pub use fund_records_traits::{FundRecordRepositoryTrait, FundRecordServiceTrait};
