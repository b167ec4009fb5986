//! User domain models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, ValidationError};

/// Access role of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Central,
    StateUser,
    Agency,
    #[default]
    Public,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Central => "central",
            UserRole::StateUser => "state_user",
            UserRole::Agency => "agency",
            UserRole::Public => "public",
        }
    }
}

impl FromStr for UserRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "central" => Ok(UserRole::Central),
            "state_user" => Ok(UserRole::StateUser),
            "agency" => Ok(UserRole::Agency),
            "public" => Ok(UserRole::Public),
            _ => Err(ValidationError::InvalidEnum {
                field: "role",
                value: s.to_string(),
            }
            .into()),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain model representing a user. The password hash never leaves storage
/// through this type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub state_id: Option<i32>,
    pub created_at: NaiveDateTime,
}

/// A user together with the stored password hash, used only for login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

/// Registration input.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<String>,
    pub state_id: Option<i32>,
}

/// A validated user ready to insert, password already hashed.
#[derive(Debug, Clone)]
pub struct NewUserRecord {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub state_id: Option<i32>,
}

/// The authenticated caller of an operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub user_id: i32,
    pub email: String,
    pub role: UserRole,
    pub state_id: Option<i32>,
}

impl Actor {
    /// Whether the caller may act on records belonging to `state_id`.
    ///
    /// State officers are confined to their own state; other roles are not
    /// state-scoped.
    pub fn can_access_state(&self, state_id: i32) -> bool {
        match self.role {
            UserRole::StateUser => self.state_id == Some(state_id),
            _ => true,
        }
    }

    pub fn ensure_state_access(&self, state_id: i32) -> crate::Result<()> {
        if self.can_access_state(state_id) {
            Ok(())
        } else {
            Err(Error::Forbidden(format!(
                "user {} is not assigned to state {}",
                self.user_id, state_id
            )))
        }
    }
}
