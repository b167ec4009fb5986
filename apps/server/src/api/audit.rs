use std::sync::Arc;

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use pmajay_core::audit::{AuditLog, AuditLogFilter};

use crate::{
    auth::{gated, CENTRAL_ONLY},
    error::ApiResult,
    extract::ApiQuery,
    main_lib::AppState,
};

async fn list_audit_logs(
    State(state): State<Arc<AppState>>,
    ApiQuery(filter): ApiQuery<AuditLogFilter>,
) -> ApiResult<Json<Vec<AuditLog>>> {
    let logs = state.audit_service.get_audit_logs(&filter)?;
    Ok(Json(logs))
}

pub fn router(state: &Arc<AppState>) -> Router<Arc<AppState>> {
    gated(
        Router::new().route("/audit-logs", get(list_audit_logs)),
        state,
        CENTRAL_ONLY,
    )
}
