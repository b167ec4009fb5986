//! Routes of the older unversioned `/api` surface: the fund-record ledger,
//! inter-agency tasks, agencies with the old field names, and summary stats.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use chrono::Local;
use pmajay_core::agencies::{Agency, AgencyFilter, NewAgency};
use pmajay_core::dashboard::SummaryStats;
use pmajay_core::fund_records::{FundRecordInput, FundRecordView};
use pmajay_core::tasks::{NewTask, Task, TaskFilter, TaskView};
use serde::Deserialize;

use super::MessageResponse;
use crate::{
    auth::{gated, CreatedResponse, CENTRAL_AND_STATE, CENTRAL_ONLY, FIELD_STAFF},
    error::ApiResult,
    extract::{ApiJson, ApiPath, ApiQuery},
    main_lib::AppState,
};

/// Agency payload as the older clients send it.
#[derive(Debug, Deserialize)]
struct LegacyAgency {
    name: String,
    #[serde(rename = "type")]
    agency_type: String,
    contact: Option<String>,
    location: Option<String>,
    role: Option<String>,
    state_id: Option<i32>,
    status: Option<String>,
}

impl From<LegacyAgency> for NewAgency {
    fn from(legacy: LegacyAgency) -> Self {
        NewAgency {
            name: legacy.name,
            agency_type: legacy.agency_type,
            contact: legacy.contact,
            location: legacy.location,
            state_id: legacy.state_id,
            roles: legacy.role,
            status: legacy.status,
        }
    }
}

async fn summary_stats(State(state): State<Arc<AppState>>) -> ApiResult<Json<SummaryStats>> {
    let stats = state
        .dashboard_service
        .get_summary_stats(Local::now().date_naive())?;
    Ok(Json(stats))
}

// Fund records

async fn list_fund_records(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<FundRecordView>>> {
    let records = state.fund_record_service.get_fund_records()?;
    Ok(Json(records))
}

async fn create_fund_record(
    State(state): State<Arc<AppState>>,
    ApiJson(input): ApiJson<FundRecordInput>,
) -> ApiResult<(StatusCode, Json<FundRecordView>)> {
    let record = state.fund_record_service.create_fund_record(input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn update_fund_record(
    ApiPath(id): ApiPath<i32>,
    State(state): State<Arc<AppState>>,
    ApiJson(input): ApiJson<FundRecordInput>,
) -> ApiResult<Json<FundRecordView>> {
    let record = state
        .fund_record_service
        .update_fund_record(id, input)
        .await?;
    Ok(Json(record))
}

async fn delete_fund_record(
    ApiPath(id): ApiPath<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MessageResponse>> {
    state.fund_record_service.delete_fund_record(id).await?;
    Ok(Json(MessageResponse::new("Fund record deleted successfully")))
}

// Tasks

async fn list_tasks(
    State(state): State<Arc<AppState>>,
    ApiQuery(filter): ApiQuery<TaskFilter>,
) -> ApiResult<Json<Vec<TaskView>>> {
    let tasks = state
        .task_service
        .get_tasks(&filter, Local::now().date_naive())?;
    Ok(Json(tasks))
}

async fn create_task(
    State(state): State<Arc<AppState>>,
    ApiJson(new_task): ApiJson<NewTask>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    let task = state.task_service.create_task(new_task).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

async fn update_task(
    ApiPath(id): ApiPath<i32>,
    State(state): State<Arc<AppState>>,
    ApiJson(update): ApiJson<NewTask>,
) -> ApiResult<Json<Task>> {
    let task = state.task_service.update_task(id, update).await?;
    Ok(Json(task))
}

async fn delete_task(
    ApiPath(id): ApiPath<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MessageResponse>> {
    state.task_service.delete_task(id).await?;
    Ok(Json(MessageResponse::new("Task deleted successfully")))
}

// Agencies

async fn list_agencies(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Agency>>> {
    let agencies = state.agency_service.get_agencies(&AgencyFilter::default())?;
    Ok(Json(agencies))
}

async fn create_agency(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<LegacyAgency>,
) -> ApiResult<Json<CreatedResponse>> {
    let agency = state.agency_service.create_agency(payload.into()).await?;
    Ok(Json(CreatedResponse {
        id: agency.id,
        message: "Agency created successfully".to_string(),
    }))
}

async fn update_agency(
    ApiPath(id): ApiPath<i32>,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<LegacyAgency>,
) -> ApiResult<Json<Agency>> {
    let agency = state.agency_service.update_agency(id, payload.into()).await?;
    Ok(Json(agency))
}

async fn delete_agency(
    ApiPath(id): ApiPath<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MessageResponse>> {
    state.agency_service.delete_agency(id).await?;
    Ok(Json(MessageResponse::new("Agency deleted successfully")))
}

pub fn router(state: &Arc<AppState>) -> Router<Arc<AppState>> {
    let ledger = Router::new()
        .route("/funds", post(create_fund_record))
        .route(
            "/funds/{id}",
            put(update_fund_record).delete(delete_fund_record),
        )
        .route("/agencies", post(create_agency))
        .route("/agencies/{id}", put(update_agency));
    let tasks = Router::new()
        .route("/tasks", post(create_task))
        .route("/tasks/{id}", put(update_task).delete(delete_task));
    let admins = Router::new().route("/agencies/{id}", delete(delete_agency));

    Router::new()
        .route("/dashboard/stats", get(summary_stats))
        .route("/funds", get(list_fund_records))
        .route("/tasks", get(list_tasks))
        .route("/agencies", get(list_agencies))
        .merge(gated(ledger, state, CENTRAL_AND_STATE))
        .merge(gated(tasks, state, FIELD_STAFF))
        .merge(gated(admins, state, CENTRAL_ONLY))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_agency_role_maps_to_roles() {
        let payload: LegacyAgency = serde_json::from_value(serde_json::json!({
            "name": "Karnataka Rural Development",
            "type": "Executing",
            "location": "Bengaluru",
            "role": "State Government",
            "contact": "rd@ka.gov.in"
        }))
        .unwrap();
        let agency = NewAgency::from(payload);
        assert_eq!(agency.roles.as_deref(), Some("State Government"));
        assert_eq!(agency.location.as_deref(), Some("Bengaluru"));
        assert!(agency.validated().is_ok());
    }
}
