//! Inter-agency communication task models.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
        }
    }
}

impl FromStr for TaskPriority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(TaskPriority::Low),
            "medium" => Ok(TaskPriority::Medium),
            "high" => Ok(TaskPriority::High),
            _ => Err(ValidationError::InvalidEnum {
                field: "task priority",
                value: s.to_string(),
            }
            .into()),
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TaskStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Overdue,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Overdue => "Overdue",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(TaskStatus::Pending),
            "inprogress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            "overdue" => Ok(TaskStatus::Overdue),
            _ => Err(ValidationError::InvalidEnum {
                field: "task status",
                value: s.to_string(),
            }
            .into()),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: i32,
    pub sender: String,
    pub receiver: String,
    pub title: String,
    pub description: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Task {
    /// The status shown to users: a task past its deadline that is not yet
    /// completed reads as overdue. The deadline day itself is not overdue.
    pub fn effective_status(&self, today: NaiveDate) -> TaskStatus {
        match self.deadline {
            Some(deadline) if deadline < today && self.status != TaskStatus::Completed => {
                TaskStatus::Overdue
            }
            _ => self.status,
        }
    }
}

/// A task as returned by the list endpoint.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TaskView {
    #[serde(flatten)]
    pub task: Task,
    pub effective_status: TaskStatus,
}

impl TaskView {
    pub fn new(task: Task, today: NaiveDate) -> Self {
        let effective_status = task.effective_status(today);
        TaskView {
            task,
            effective_status,
        }
    }
}

/// Input model for creating or replacing a task.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NewTask {
    pub sender: String,
    pub receiver: String,
    pub title: String,
    pub description: Option<String>,
    /// Accepts an ISO date or an empty string for "no deadline".
    pub deadline: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
}

/// A validated task ready to store.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRecord {
    pub sender: String,
    pub receiver: String,
    pub title: String,
    pub description: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
}

impl NewTask {
    pub fn validate(self) -> crate::Result<TaskRecord> {
        let required = |field: &str, value: &str| -> crate::Result<String> {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Err(ValidationError::MissingField(field.to_string()).into())
            } else {
                Ok(trimmed.to_string())
            }
        };
        let deadline = match self.deadline.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(NaiveDate::parse_from_str(raw, "%Y-%m-%d")?),
            _ => None,
        };
        let priority = match self.priority.as_deref() {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => TaskPriority::default(),
        };
        let status = match self.status.as_deref() {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => TaskStatus::default(),
        };
        Ok(TaskRecord {
            sender: required("sender", &self.sender)?,
            receiver: required("receiver", &self.receiver)?,
            title: required("title", &self.title)?,
            description: self.description,
            deadline,
            priority,
            status,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskFilter {
    pub status: Option<String>,
    pub priority: Option<String>,
}
