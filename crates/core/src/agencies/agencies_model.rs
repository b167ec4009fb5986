//! Agency domain models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, ValidationError};

/// Whether an agency implements the scheme centrally or executes it on the ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AgencyType {
    #[default]
    Implementing,
    Executing,
}

impl AgencyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgencyType::Implementing => "implementing",
            AgencyType::Executing => "executing",
        }
    }
}

impl FromStr for AgencyType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "implementing" => Ok(AgencyType::Implementing),
            "executing" => Ok(AgencyType::Executing),
            _ => Err(ValidationError::InvalidEnum {
                field: "agency type",
                value: s.to_string(),
            }
            .into()),
        }
    }
}

impl fmt::Display for AgencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AgencyStatus {
    #[default]
    Active,
    Inactive,
    Suspended,
}

impl AgencyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgencyStatus::Active => "active",
            AgencyStatus::Inactive => "inactive",
            AgencyStatus::Suspended => "suspended",
        }
    }
}

impl FromStr for AgencyStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(AgencyStatus::Active),
            "inactive" => Ok(AgencyStatus::Inactive),
            "suspended" => Ok(AgencyStatus::Suspended),
            _ => Err(ValidationError::InvalidEnum {
                field: "agency status",
                value: s.to_string(),
            }
            .into()),
        }
    }
}

impl fmt::Display for AgencyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain model representing an agency
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Agency {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub agency_type: AgencyType,
    pub contact: Option<String>,
    pub location: Option<String>,
    pub state_id: Option<i32>,
    pub roles: Option<String>,
    pub status: AgencyStatus,
    pub created_at: NaiveDateTime,
}

/// Input model for creating or replacing an agency.
///
/// Enumerated fields arrive as free text and are checked by the service so a
/// bad value surfaces as a validation error rather than a decode failure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NewAgency {
    pub name: String,
    #[serde(rename = "type")]
    pub agency_type: String,
    pub contact: Option<String>,
    pub location: Option<String>,
    pub state_id: Option<i32>,
    pub roles: Option<String>,
    pub status: Option<String>,
}

impl NewAgency {
    /// Validates the enumerated fields and rewrites them in canonical form.
    pub fn validated(mut self) -> crate::Result<Self> {
        self.name = self.name.trim().to_string();
        if self.name.is_empty() {
            return Err(ValidationError::MissingField("name".into()).into());
        }
        self.agency_type = self.agency_type.parse::<AgencyType>()?.as_str().to_string();
        let status = match self.status.as_deref() {
            Some(raw) if !raw.trim().is_empty() => raw.parse::<AgencyStatus>()?,
            _ => AgencyStatus::default(),
        };
        self.status = Some(status.as_str().to_string());
        Ok(self)
    }
}

/// Optional filters for listing agencies.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgencyFilter {
    pub state_id: Option<i32>,
    #[serde(rename = "type")]
    pub agency_type: Option<String>,
    pub status: Option<String>,
}
