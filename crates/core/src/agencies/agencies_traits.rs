use crate::agencies::agencies_model::{Agency, AgencyFilter, NewAgency};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for agency repository operations
#[async_trait]
pub trait AgencyRepositoryTrait: Send + Sync {
    fn list_agencies(&self, filter: &AgencyFilter) -> Result<Vec<Agency>>;
    fn get_agency(&self, agency_id: i32) -> Result<Option<Agency>>;
    fn count_agencies(&self) -> Result<i64>;
    async fn insert_agency(&self, new_agency: NewAgency) -> Result<Agency>;
    async fn update_agency(&self, agency_id: i32, update: NewAgency) -> Result<Agency>;
    async fn delete_agency(&self, agency_id: i32) -> Result<usize>;
}

/// Trait for agency service operations
#[async_trait]
pub trait AgencyServiceTrait: Send + Sync {
    fn get_agencies(&self, filter: &AgencyFilter) -> Result<Vec<Agency>>;
    fn get_agency(&self, agency_id: i32) -> Result<Agency>;
    async fn create_agency(&self, new_agency: NewAgency) -> Result<Agency>;
    async fn update_agency(&self, agency_id: i32, update: NewAgency) -> Result<Agency>;
    async fn delete_agency(&self, agency_id: i32) -> Result<()>;
}
