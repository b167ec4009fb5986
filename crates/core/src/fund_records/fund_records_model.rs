use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::dashboard::utilization_rate;
use crate::errors::{Error, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FundRecordStatus {
    #[default]
    Active,
    Completed,
    #[serde(rename = "On Hold")]
    OnHold,
    Cancelled,
}

impl FundRecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FundRecordStatus::Active => "Active",
            FundRecordStatus::Completed => "Completed",
            FundRecordStatus::OnHold => "On Hold",
            FundRecordStatus::Cancelled => "Cancelled",
        }
    }
}

impl FromStr for FundRecordStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "active" => Ok(FundRecordStatus::Active),
            "completed" => Ok(FundRecordStatus::Completed),
            "onhold" => Ok(FundRecordStatus::OnHold),
            "cancelled" => Ok(FundRecordStatus::Cancelled),
            _ => Err(ValidationError::InvalidEnum {
                field: "fund status",
                value: s.to_string(),
            }
            .into()),
        }
    }
}

impl fmt::Display for FundRecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FundRecord {
    pub id: i32,
    pub component: String,
    pub state: String,
    pub amount_allocated: f64,
    pub amount_used: f64,
    pub status: FundRecordStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A fund record with its derived utilization percentage.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FundRecordView {
    #[serde(flatten)]
    pub record: FundRecord,
    pub utilization_rate: f64,
}

impl From<FundRecord> for FundRecordView {
    fn from(record: FundRecord) -> Self {
        let utilization_rate = utilization_rate(record.amount_used, record.amount_allocated);
        FundRecordView {
            record,
            utilization_rate,
        }
    }
}

/// Request body for creating or replacing a fund record.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FundRecordInput {
    pub component: String,
    pub state: String,
    pub amount_allocated: f64,
    #[serde(default)]
    pub amount_used: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidFundRecord {
    pub component: String,
    pub state: String,
    pub amount_allocated: f64,
    pub amount_used: f64,
    pub status: FundRecordStatus,
}

impl FundRecordInput {
    pub fn validate(self) -> crate::Result<ValidFundRecord> {
        let component = self.component.trim().to_string();
        if component.is_empty() {
            return Err(ValidationError::MissingField("component".into()).into());
        }
        let state = self.state.trim().to_string();
        if state.is_empty() {
            return Err(ValidationError::MissingField("state".into()).into());
        }
        let amount_used = self.amount_used.unwrap_or(0.0);
        for (field, value) in [
            ("amount_allocated", self.amount_allocated),
            ("amount_used", amount_used),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::invalid(format!(
                    "{field} must be a non-negative number"
                )));
            }
        }
        let status = match self.status.as_deref() {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => FundRecordStatus::default(),
        };
        Ok(ValidFundRecord {
            component,
            state,
            amount_allocated: self.amount_allocated,
            amount_used,
            status,
        })
    }
}
