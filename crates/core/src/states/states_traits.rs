use crate::errors::Result;
use crate::states::states_model::{NewState, State};
use async_trait::async_trait;

/// Trait for state repository operations
#[async_trait]
pub trait StateRepositoryTrait: Send + Sync {
    fn list_states(&self) -> Result<Vec<State>>;
    fn get_state(&self, state_id: i32) -> Result<Option<State>>;
    async fn insert_state(&self, new_state: NewState) -> Result<State>;
}

/// Trait for state service operations
#[async_trait]
pub trait StateServiceTrait: Send + Sync {
    fn get_states(&self) -> Result<Vec<State>>;
    fn get_state(&self, state_id: i32) -> Result<State>;
    async fn create_state(&self, new_state: NewState) -> Result<State>;
}
