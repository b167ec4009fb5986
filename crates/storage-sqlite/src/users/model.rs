//! Database models for users.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use pmajay_core::users::{NewUserRecord, User, UserCredentials};

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub state_id: Option<i32>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUserDB {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub state_id: Option<i32>,
}

impl From<UserDB> for UserCredentials {
    fn from(db: UserDB) -> Self {
        Self {
            password_hash: db.password,
            user: User {
                id: db.id,
                name: db.name,
                email: db.email,
                role: db.role.parse().unwrap_or_default(),
                state_id: db.state_id,
                created_at: db.created_at,
            },
        }
    }
}

impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        UserCredentials::from(db).user
    }
}

impl From<NewUserRecord> for NewUserDB {
    fn from(record: NewUserRecord) -> Self {
        Self {
            name: record.name,
            email: record.email,
            password: record.password_hash,
            role: record.role.as_str().to_string(),
            state_id: record.state_id,
        }
    }
}
