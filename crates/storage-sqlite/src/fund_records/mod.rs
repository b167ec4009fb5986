//! SQLite storage implementation for the unversioned API's fund ledger.

mod model;
mod repository;

pub use model::{FundRecordDB, FundRecordWriteDB};
pub use repository::FundRecordRepository;
