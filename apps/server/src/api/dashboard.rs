use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::Local;
use pmajay_core::constants::STATE_REPORT_FILENAME;
use pmajay_core::dashboard::{CentralDashboard, PublicDashboard, StateDashboard};
use pmajay_core::users::Actor;

use crate::{
    auth::{gated, CENTRAL_AND_STATE, CENTRAL_ONLY},
    error::ApiResult,
    extract::ApiPath,
    main_lib::AppState,
};

async fn central_dashboard(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<CentralDashboard>> {
    let today = Local::now().date_naive();
    let dashboard = state.dashboard_service.get_central_dashboard(today)?;
    Ok(Json(dashboard))
}

async fn export_state_report(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    let csv = state.dashboard_service.export_state_report()?;
    let disposition = format!("attachment; filename=\"{}\"", STATE_REPORT_FILENAME);
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    ))
}

async fn state_dashboard(
    ApiPath(state_id): ApiPath<i32>,
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<Actor>,
) -> ApiResult<Json<StateDashboard>> {
    let dashboard = state
        .dashboard_service
        .get_state_dashboard(&actor, state_id)?;
    Ok(Json(dashboard))
}

async fn public_dashboard(State(state): State<Arc<AppState>>) -> ApiResult<Json<PublicDashboard>> {
    let dashboard = state.dashboard_service.get_public_dashboard()?;
    Ok(Json(dashboard))
}

pub fn router(state: &Arc<AppState>) -> Router<Arc<AppState>> {
    let central = Router::new()
        .route("/dashboard/central", get(central_dashboard))
        .route("/dashboard/central/export.csv", get(export_state_report));
    let regional = Router::new().route("/dashboard/state/{state_id}", get(state_dashboard));

    Router::new()
        .route("/dashboard/public", get(public_dashboard))
        .merge(gated(central, state, CENTRAL_ONLY))
        .merge(gated(regional, state, CENTRAL_AND_STATE))
}
