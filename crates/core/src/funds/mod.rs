//! Fund transactions recorded against projects.

mod funds_model;
mod funds_traits;

pub use funds_model::{FundTransaction, FundTransactionType, NewFundTransaction};
pub use funds_traits::FundTransactionRepositoryTrait;
