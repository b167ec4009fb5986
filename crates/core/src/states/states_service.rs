use crate::errors::{Error, Result};
use crate::states::states_model::{NewState, State};
use crate::states::states_traits::{StateRepositoryTrait, StateServiceTrait};
use async_trait::async_trait;
use std::sync::Arc;

pub struct StateService<T: StateRepositoryTrait> {
    state_repo: Arc<T>,
}

impl<T: StateRepositoryTrait> StateService<T> {
    pub fn new(state_repo: Arc<T>) -> Self {
        StateService { state_repo }
    }
}

#[async_trait]
impl<T: StateRepositoryTrait + Send + Sync> StateServiceTrait for StateService<T> {
    fn get_states(&self) -> Result<Vec<State>> {
        self.state_repo.list_states()
    }

    fn get_state(&self, state_id: i32) -> Result<State> {
        self.state_repo
            .get_state(state_id)?
            .ok_or_else(|| Error::not_found("State", state_id))
    }

    async fn create_state(&self, new_state: NewState) -> Result<State> {
        let new_state = new_state.normalized()?;
        self.state_repo.insert_state(new_state).await
    }
}
