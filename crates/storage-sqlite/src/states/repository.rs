use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use pmajay_core::states::{NewState, State, StateRepositoryTrait};
use pmajay_core::Result;

use super::model::{NewStateDB, StateDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::states;

pub struct StateRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl StateRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        StateRepository { pool, writer }
    }
}

#[async_trait]
impl StateRepositoryTrait for StateRepository {
    fn list_states(&self) -> Result<Vec<State>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = states::table
            .order(states::name.asc())
            .select(StateDB::as_select())
            .load::<StateDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(State::from).collect())
    }

    fn get_state(&self, state_id: i32) -> Result<Option<State>> {
        let mut conn = get_connection(&self.pool)?;
        let row = states::table
            .find(state_id)
            .select(StateDB::as_select())
            .first::<StateDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(row.map(State::from))
    }

    async fn insert_state(&self, new_state: NewState) -> Result<State> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<State> {
                let row = diesel::insert_into(states::table)
                    .values(NewStateDB::from(new_state))
                    .returning(StateDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(State::from(row))
            })
            .await
    }
}
