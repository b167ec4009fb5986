use std::sync::Arc;

use axum::{extract::State, routing::get, Router};
use pmajay_storage_sqlite::ping;

use crate::{error::ApiResult, main_lib::AppState};

async fn healthz() -> &'static str {
    "ok"
}

/// Ready once the database answers a trivial query.
async fn readyz(State(state): State<Arc<AppState>>) -> ApiResult<&'static str> {
    ping(&state.pool)?;
    Ok("ok")
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
