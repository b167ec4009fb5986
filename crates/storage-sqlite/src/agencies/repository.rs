use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use pmajay_core::agencies::{Agency, AgencyFilter, AgencyRepositoryTrait, NewAgency};
use pmajay_core::Result;

use super::model::{AgencyDB, NewAgencyDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::agencies;

pub struct AgencyRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AgencyRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        AgencyRepository { pool, writer }
    }
}

#[async_trait]
impl AgencyRepositoryTrait for AgencyRepository {
    fn list_agencies(&self, filter: &AgencyFilter) -> Result<Vec<Agency>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = agencies::table.into_boxed();
        if let Some(state_id) = filter.state_id {
            query = query.filter(agencies::state_id.eq(state_id));
        }
        if let Some(agency_type) = &filter.agency_type {
            query = query.filter(agencies::agency_type.eq(agency_type.clone()));
        }
        if let Some(status) = &filter.status {
            query = query.filter(agencies::status.eq(status.clone()));
        }
        let rows = query
            .order((agencies::created_at.desc(), agencies::id.desc()))
            .select(AgencyDB::as_select())
            .load::<AgencyDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Agency::from).collect())
    }

    fn get_agency(&self, agency_id: i32) -> Result<Option<Agency>> {
        let mut conn = get_connection(&self.pool)?;
        let row = agencies::table
            .find(agency_id)
            .select(AgencyDB::as_select())
            .first::<AgencyDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(row.map(Agency::from))
    }

    fn count_agencies(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        agencies::table
            .count()
            .get_result::<i64>(&mut conn)
            .into_core()
    }

    async fn insert_agency(&self, new_agency: NewAgency) -> Result<Agency> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Agency> {
                let row = diesel::insert_into(agencies::table)
                    .values(NewAgencyDB::from(new_agency))
                    .returning(AgencyDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Agency::from(row))
            })
            .await
    }

    async fn update_agency(&self, agency_id: i32, update: NewAgency) -> Result<Agency> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Agency> {
                let row = diesel::update(agencies::table.find(agency_id))
                    .set(NewAgencyDB::from(update))
                    .returning(AgencyDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Agency::from(row))
            })
            .await
    }

    async fn delete_agency(&self, agency_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(agencies::table.find(agency_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
