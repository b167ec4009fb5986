//! Database models for states.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use pmajay_core::states::{NewState, State};

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::states)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StateDB {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::states)]
pub struct NewStateDB {
    pub name: String,
    pub code: String,
}

impl From<StateDB> for State {
    fn from(db: StateDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            code: db.code,
            created_at: db.created_at,
        }
    }
}

impl From<NewState> for NewStateDB {
    fn from(domain: NewState) -> Self {
        Self {
            name: domain.name,
            code: domain.code,
        }
    }
}
