//! State domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An Indian state or union territory participating in the scheme.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct State {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewState {
    pub name: String,
    pub code: String,
}

impl NewState {
    /// Trims both fields and upper-cases the code.
    pub fn normalized(self) -> crate::Result<Self> {
        let name = self.name.trim().to_string();
        let code = self.code.trim().to_uppercase();
        if name.is_empty() {
            return Err(crate::errors::ValidationError::MissingField("name".into()).into());
        }
        if code.is_empty() {
            return Err(crate::errors::ValidationError::MissingField("code".into()).into());
        }
        Ok(Self { name, code })
    }
}
