use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use pmajay_core::states::{NewState, State as IndianState};

use crate::{
    auth::{gated, CENTRAL_ONLY},
    error::ApiResult,
    extract::{ApiJson, ApiPath},
    main_lib::AppState,
};

async fn list_states(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<IndianState>>> {
    let states = state.state_service.get_states()?;
    Ok(Json(states))
}

async fn get_state(
    ApiPath(id): ApiPath<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<IndianState>> {
    let found = state.state_service.get_state(id)?;
    Ok(Json(found))
}

async fn create_state(
    State(state): State<Arc<AppState>>,
    ApiJson(new_state): ApiJson<NewState>,
) -> ApiResult<(StatusCode, Json<IndianState>)> {
    let created = state.state_service.create_state(new_state).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub fn router(state: &Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/states", get(list_states))
        .route("/states/{id}", get(get_state))
        .merge(gated(
            Router::new().route("/states", post(create_state)),
            state,
            CENTRAL_ONLY,
        ))
}
