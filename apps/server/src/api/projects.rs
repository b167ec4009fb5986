use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use pmajay_core::funds::NewFundTransaction;
use pmajay_core::projects::{
    NewProject, ProgressUpdate, Project, ProjectDetail, ProjectFilter, ProjectSummary,
};
use pmajay_core::users::Actor;

use super::MessageResponse;
use crate::{
    auth::{gated, CreatedResponse, CENTRAL_AND_STATE, CENTRAL_ONLY, FIELD_STAFF},
    error::ApiResult,
    extract::{ApiJson, ApiPath, ApiQuery},
    main_lib::AppState,
};

async fn list_projects(
    State(state): State<Arc<AppState>>,
    ApiQuery(filter): ApiQuery<ProjectFilter>,
) -> ApiResult<Json<Vec<ProjectSummary>>> {
    let projects = state.project_service.get_projects(&filter)?;
    Ok(Json(projects))
}

async fn get_project(
    ApiPath(id): ApiPath<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ProjectDetail>> {
    let detail = state.project_service.get_project_detail(id)?;
    Ok(Json(detail))
}

async fn create_project(
    State(state): State<Arc<AppState>>,
    ApiJson(new_project): ApiJson<NewProject>,
) -> ApiResult<(StatusCode, Json<Project>)> {
    let project = state.project_service.create_project(new_project).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

async fn update_progress(
    ApiPath(id): ApiPath<i32>,
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<Actor>,
    ApiJson(update): ApiJson<ProgressUpdate>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .project_service
        .update_progress(&actor, id, update)
        .await?;
    Ok(Json(MessageResponse::new("Progress updated successfully")))
}

async fn add_fund_transaction(
    ApiPath(id): ApiPath<i32>,
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<Actor>,
    ApiJson(transaction): ApiJson<NewFundTransaction>,
) -> ApiResult<Json<CreatedResponse>> {
    let created = state
        .project_service
        .add_fund_transaction(&actor, id, transaction)
        .await?;
    Ok(Json(CreatedResponse {
        id: created.id,
        message: "Fund transaction created successfully".to_string(),
    }))
}

pub fn router(state: &Arc<AppState>) -> Router<Arc<AppState>> {
    let planners = Router::new().route("/projects", post(create_project));
    let reporters = Router::new().route("/projects/{id}/progress", post(update_progress));
    let treasurers = Router::new().route("/projects/{id}/funds", post(add_fund_transaction));

    Router::new()
        .route("/projects", get(list_projects))
        .route("/projects/{id}", get(get_project))
        .merge(gated(planners, state, CENTRAL_ONLY))
        .merge(gated(reporters, state, FIELD_STAFF))
        .merge(gated(treasurers, state, CENTRAL_AND_STATE))
}
