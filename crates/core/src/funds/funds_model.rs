//! Fund transaction domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FundTransactionType {
    #[default]
    Allocated,
    Released,
    Utilized,
}

impl FundTransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FundTransactionType::Allocated => "allocated",
            FundTransactionType::Released => "released",
            FundTransactionType::Utilized => "utilized",
        }
    }
}

impl FromStr for FundTransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "allocated" => Ok(FundTransactionType::Allocated),
            "released" => Ok(FundTransactionType::Released),
            "utilized" => Ok(FundTransactionType::Utilized),
            _ => Err(ValidationError::InvalidEnum {
                field: "fund transaction type",
                value: s.to_string(),
            }
            .into()),
        }
    }
}

impl fmt::Display for FundTransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FundTransaction {
    pub id: i32,
    pub project_id: i32,
    pub amount: f64,
    pub transaction_date: NaiveDate,
    #[serde(rename = "type")]
    pub transaction_type: FundTransactionType,
    pub note: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Request body for recording a transaction against a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFundTransaction {
    pub amount: f64,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub note: Option<String>,
}

impl NewFundTransaction {
    pub fn parsed_type(&self) -> crate::Result<FundTransactionType> {
        self.transaction_type.parse()
    }

    pub fn validate(&self) -> crate::Result<FundTransactionType> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(Error::invalid("amount must be a positive number"));
        }
        self.parsed_type()
    }
}
