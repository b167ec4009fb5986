//! Agencies module - implementing and executing agencies per state.

mod agencies_model;
mod agencies_service;
mod agencies_traits;

pub use agencies_model::{Agency, AgencyFilter, AgencyStatus, AgencyType, NewAgency};
pub use agencies_service::AgencyService;
pub use agencies_traits::{AgencyRepositoryTrait, AgencyServiceTrait};
