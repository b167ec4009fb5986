use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use pmajay_core::agencies::{Agency, AgencyFilter, NewAgency};

use crate::{
    auth::{gated, CENTRAL_AND_STATE, CENTRAL_ONLY},
    error::ApiResult,
    extract::{ApiJson, ApiPath, ApiQuery},
    main_lib::AppState,
};

async fn list_agencies(
    State(state): State<Arc<AppState>>,
    ApiQuery(filter): ApiQuery<AgencyFilter>,
) -> ApiResult<Json<Vec<Agency>>> {
    let agencies = state.agency_service.get_agencies(&filter)?;
    Ok(Json(agencies))
}

async fn get_agency(
    ApiPath(id): ApiPath<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Agency>> {
    let agency = state.agency_service.get_agency(id)?;
    Ok(Json(agency))
}

async fn create_agency(
    State(state): State<Arc<AppState>>,
    ApiJson(new_agency): ApiJson<NewAgency>,
) -> ApiResult<(StatusCode, Json<Agency>)> {
    let agency = state.agency_service.create_agency(new_agency).await?;
    Ok((StatusCode::CREATED, Json(agency)))
}

async fn update_agency(
    ApiPath(id): ApiPath<i32>,
    State(state): State<Arc<AppState>>,
    ApiJson(update): ApiJson<NewAgency>,
) -> ApiResult<Json<Agency>> {
    let agency = state.agency_service.update_agency(id, update).await?;
    Ok(Json(agency))
}

async fn delete_agency(
    ApiPath(id): ApiPath<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.agency_service.delete_agency(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router(state: &Arc<AppState>) -> Router<Arc<AppState>> {
    let editors = Router::new()
        .route("/agencies", post(create_agency))
        .route("/agencies/{id}", put(update_agency));
    let admins = Router::new().route("/agencies/{id}", delete(delete_agency));

    Router::new()
        .route("/agencies", get(list_agencies))
        .route("/agencies/{id}", get(get_agency))
        .merge(gated(editors, state, CENTRAL_AND_STATE))
        .merge(gated(admins, state, CENTRAL_ONLY))
}
