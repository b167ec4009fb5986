//! SQLite storage implementation for project fund transactions.

mod model;
mod repository;

pub use model::{FundTransactionDB, NewFundTransactionDB};
pub use repository::FundTransactionRepository;
