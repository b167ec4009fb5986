//! Project domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, ValidationError};
use crate::funds::FundTransaction;
use crate::reports::Report;

/// Scheme component a project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProjectComponent {
    #[default]
    AdarshGram,
    #[serde(rename = "GIA")]
    Gia,
    Hostel,
}

impl ProjectComponent {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectComponent::AdarshGram => "AdarshGram",
            ProjectComponent::Gia => "GIA",
            ProjectComponent::Hostel => "Hostel",
        }
    }
}

impl FromStr for ProjectComponent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "adarshgram" => Ok(ProjectComponent::AdarshGram),
            "gia" => Ok(ProjectComponent::Gia),
            "hostel" => Ok(ProjectComponent::Hostel),
            _ => Err(ValidationError::InvalidEnum {
                field: "component",
                value: s.to_string(),
            }
            .into()),
        }
    }
}

impl fmt::Display for ProjectComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Planned,
    Ongoing,
    Completed,
    Stalled,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planned => "planned",
            ProjectStatus::Ongoing => "ongoing",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Stalled => "stalled",
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "planned" => Ok(ProjectStatus::Planned),
            "ongoing" => Ok(ProjectStatus::Ongoing),
            "completed" => Ok(ProjectStatus::Completed),
            "stalled" => Ok(ProjectStatus::Stalled),
            _ => Err(ValidationError::InvalidEnum {
                field: "project status",
                value: s.to_string(),
            }
            .into()),
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain model representing a project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub component: ProjectComponent,
    pub state_id: i32,
    pub agency_ids: Vec<i32>,
    pub budget_total: f64,
    pub budget_released: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: ProjectStatus,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub progress_percent: i32,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Project {
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

/// A project joined with the name and code of its state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectSummary {
    #[serde(flatten)]
    pub project: Project,
    pub state_name: String,
    pub state_code: String,
}

/// A project with its fund history and uploaded reports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub summary: ProjectSummary,
    pub transactions: Vec<FundTransaction>,
    pub reports: Vec<Report>,
}

/// Input model for creating a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub component: String,
    pub state_id: i32,
    #[serde(default)]
    pub agency_ids: Vec<i32>,
    pub budget_total: Option<f64>,
    pub budget_released: Option<f64>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub progress_percent: Option<i32>,
    pub description: Option<String>,
}

/// A validated project ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRecord {
    pub title: String,
    pub component: ProjectComponent,
    pub state_id: i32,
    pub agency_ids: Vec<i32>,
    pub budget_total: f64,
    pub budget_released: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: ProjectStatus,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub progress_percent: i32,
    pub description: Option<String>,
}

pub(crate) fn check_progress(progress: i32) -> crate::Result<()> {
    if (0..=100).contains(&progress) {
        Ok(())
    } else {
        Err(Error::invalid(format!(
            "progress_percent must be between 0 and 100, got {progress}"
        )))
    }
}

impl NewProject {
    pub fn validate(self) -> crate::Result<ProjectRecord> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::MissingField("title".into()).into());
        }
        if self.end_date < self.start_date {
            return Err(Error::invalid("end_date must not be before start_date"));
        }
        let budget_total = self.budget_total.unwrap_or(0.0);
        let budget_released = self.budget_released.unwrap_or(0.0);
        if !budget_total.is_finite() || budget_total < 0.0 {
            return Err(Error::invalid("budget_total must be a non-negative number"));
        }
        if !budget_released.is_finite() || budget_released < 0.0 {
            return Err(Error::invalid(
                "budget_released must be a non-negative number",
            ));
        }
        let progress_percent = self.progress_percent.unwrap_or(0);
        check_progress(progress_percent)?;
        if let Some(lat) = self.latitude {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(Error::invalid("latitude out of range"));
            }
        }
        if let Some(lng) = self.longitude {
            if !(-180.0..=180.0).contains(&lng) {
                return Err(Error::invalid("longitude out of range"));
            }
        }
        let status = match self.status.as_deref() {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => ProjectStatus::default(),
        };
        Ok(ProjectRecord {
            title,
            component: self.component.parse()?,
            state_id: self.state_id,
            agency_ids: self.agency_ids,
            budget_total,
            budget_released,
            start_date: self.start_date,
            end_date: self.end_date,
            status,
            latitude: self.latitude,
            longitude: self.longitude,
            progress_percent,
            description: self.description,
        })
    }
}

/// Optional filters for listing projects.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectFilter {
    pub state_id: Option<i32>,
    pub component: Option<String>,
    pub status: Option<String>,
}

/// Request body for a progress update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub progress_percent: i32,
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> NewProject {
        NewProject {
            title: "Adarsh Gram Scheme - Pune District".to_string(),
            component: "AdarshGram".to_string(),
            state_id: 1,
            agency_ids: vec![1, 2],
            budget_total: Some(5_000_000.0),
            budget_released: None,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            status: Some("Ongoing".to_string()),
            latitude: Some(18.5204),
            longitude: Some(73.8567),
            progress_percent: Some(45),
            description: None,
        }
    }

    #[test]
    fn valid_input_is_canonicalized() {
        let record = input().validate().unwrap();
        assert_eq!(record.component, ProjectComponent::AdarshGram);
        assert_eq!(record.status, ProjectStatus::Ongoing);
        assert_eq!(record.budget_released, 0.0);
    }

    #[test]
    fn end_before_start_is_rejected() {
        let mut bad = input();
        bad.end_date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert!(bad.validate().is_err());
    }

    #[test]
    fn progress_out_of_range_is_rejected() {
        let mut bad = input();
        bad.progress_percent = Some(101);
        assert!(bad.validate().is_err());
        assert!(check_progress(-1).is_err());
        assert!(check_progress(100).is_ok());
    }

    #[test]
    fn component_serializes_with_source_spelling() {
        assert_eq!(
            serde_json::to_string(&ProjectComponent::Gia).unwrap(),
            "\"GIA\""
        );
        assert_eq!("gia".parse::<ProjectComponent>().unwrap(), ProjectComponent::Gia);
        assert!("Road".parse::<ProjectComponent>().is_err());
    }
}
