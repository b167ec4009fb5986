//! Database models for agencies.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use pmajay_core::agencies::{Agency, AgencyStatus, NewAgency};

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::agencies)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AgencyDB {
    pub id: i32,
    pub name: String,
    pub agency_type: String,
    pub contact: Option<String>,
    pub location: Option<String>,
    pub state_id: Option<i32>,
    pub roles: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
}

/// Insert and full-replace payload. `None` fields are written as NULL.
#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::agencies)]
#[diesel(treat_none_as_null = true)]
pub struct NewAgencyDB {
    pub name: String,
    pub agency_type: String,
    pub contact: Option<String>,
    pub location: Option<String>,
    pub state_id: Option<i32>,
    pub roles: Option<String>,
    pub status: String,
}

impl From<AgencyDB> for Agency {
    fn from(db: AgencyDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            agency_type: db.agency_type.parse().unwrap_or_default(),
            contact: db.contact,
            location: db.location,
            state_id: db.state_id,
            roles: db.roles,
            status: db.status.parse().unwrap_or_default(),
            created_at: db.created_at,
        }
    }
}

impl From<NewAgency> for NewAgencyDB {
    fn from(domain: NewAgency) -> Self {
        Self {
            name: domain.name,
            agency_type: domain.agency_type,
            contact: domain.contact,
            location: domain.location,
            state_id: domain.state_id,
            roles: domain.roles,
            status: domain
                .status
                .unwrap_or_else(|| AgencyStatus::default().as_str().to_string()),
        }
    }
}
