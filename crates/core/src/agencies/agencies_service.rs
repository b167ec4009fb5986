use crate::agencies::agencies_model::{Agency, AgencyFilter, AgencyStatus, AgencyType, NewAgency};
use crate::agencies::agencies_traits::{AgencyRepositoryTrait, AgencyServiceTrait};
use crate::errors::{Error, Result};
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

pub struct AgencyService<T: AgencyRepositoryTrait> {
    agency_repo: Arc<T>,
}

impl<T: AgencyRepositoryTrait> AgencyService<T> {
    pub fn new(agency_repo: Arc<T>) -> Self {
        AgencyService { agency_repo }
    }
}

fn normalize_filter(filter: &AgencyFilter) -> Result<AgencyFilter> {
    let agency_type = match filter.agency_type.as_deref() {
        Some(t) if !t.is_empty() => Some(t.parse::<AgencyType>()?.as_str().to_string()),
        _ => None,
    };
    let status = match filter.status.as_deref() {
        Some(s) if !s.is_empty() => Some(s.parse::<AgencyStatus>()?.as_str().to_string()),
        _ => None,
    };
    Ok(AgencyFilter {
        state_id: filter.state_id,
        agency_type,
        status,
    })
}

#[async_trait]
impl<T: AgencyRepositoryTrait + Send + Sync> AgencyServiceTrait for AgencyService<T> {
    fn get_agencies(&self, filter: &AgencyFilter) -> Result<Vec<Agency>> {
        let filter = normalize_filter(filter)?;
        self.agency_repo.list_agencies(&filter)
    }

    fn get_agency(&self, agency_id: i32) -> Result<Agency> {
        self.agency_repo
            .get_agency(agency_id)?
            .ok_or_else(|| Error::not_found("Agency", agency_id))
    }

    async fn create_agency(&self, new_agency: NewAgency) -> Result<Agency> {
        let new_agency = new_agency.validated()?;
        debug!("Creating agency '{}'", new_agency.name);
        self.agency_repo.insert_agency(new_agency).await
    }

    async fn update_agency(&self, agency_id: i32, update: NewAgency) -> Result<Agency> {
        let update = update.validated()?;
        if self.agency_repo.get_agency(agency_id)?.is_none() {
            return Err(Error::not_found("Agency", agency_id));
        }
        self.agency_repo.update_agency(agency_id, update).await
    }

    async fn delete_agency(&self, agency_id: i32) -> Result<()> {
        match self.agency_repo.delete_agency(agency_id).await? {
            0 => Err(Error::not_found("Agency", agency_id)),
            _ => Ok(()),
        }
    }
}
