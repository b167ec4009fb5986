use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::Utc;
use pmajay_core::reports::{sanitize_file_name, NewReport, Report};
use pmajay_core::users::Actor;
use serde::Serialize;

use crate::{
    auth::{gated, FIELD_STAFF},
    error::{ApiError, ApiResult},
    extract::ApiPath,
    main_lib::AppState,
};

#[derive(Serialize)]
struct UploadResponse {
    id: i32,
    message: String,
    file_path: String,
}

struct UploadForm {
    file_name: String,
    content: Vec<u8>,
    project_id: i32,
    notes: Option<String>,
}

async fn read_upload_form(mut multipart: Multipart) -> ApiResult<UploadForm> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut project_id: Option<String> = None;
    let mut notes: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ApiError::BadRequest(format!("Failed to read multipart field: {}", e))
    })? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let bytes = field.bytes().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read file content: {}", e))
                })?;
                file = Some((file_name, bytes.to_vec()));
            }
            "project_id" | "notes" => {
                let text = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read field {}: {}", name, e))
                })?;
                if name == "project_id" {
                    project_id = Some(text);
                } else if !text.trim().is_empty() {
                    notes = Some(text);
                }
            }
            _ => {}
        }
    }

    let (file_name, content) =
        file.ok_or_else(|| ApiError::BadRequest("No file uploaded".to_string()))?;
    let project_id = project_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::BadRequest("project_id is required".to_string()))?
        .parse::<i32>()
        .map_err(|_| ApiError::BadRequest("project_id must be a number".to_string()))?;

    Ok(UploadForm {
        file_name,
        content,
        project_id,
        notes,
    })
}

async fn upload_report(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<Actor>,
    multipart: Multipart,
) -> ApiResult<(StatusCode, Json<UploadResponse>)> {
    let form = read_upload_form(multipart).await?;
    state
        .report_service
        .ensure_upload_target(&actor, form.project_id)?;

    let stored_name = format!(
        "{}-{}",
        Utc::now().timestamp_millis(),
        sanitize_file_name(&form.file_name)
    );
    let disk_path = state.upload_dir.join(&stored_name);
    tokio::fs::write(&disk_path, &form.content)
        .await
        .map_err(|e| ApiError::Internal(format!("Failed to store upload: {}", e)))?;

    let new_report = NewReport {
        project_id: form.project_id,
        uploaded_by: actor.user_id,
        file_path: format!("/uploads/{}", stored_name),
        notes: form.notes,
    };
    let report = match state.report_service.create_report(&actor, new_report).await {
        Ok(report) => report,
        Err(err) => {
            if let Err(e) = tokio::fs::remove_file(&disk_path).await {
                tracing::warn!("Could not remove orphaned upload {}: {}", stored_name, e);
            }
            return Err(err.into());
        }
    };

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            id: report.id,
            message: "Report uploaded successfully".to_string(),
            file_path: report.file_path,
        }),
    ))
}

async fn list_project_reports(
    ApiPath(id): ApiPath<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Report>>> {
    let reports = state.report_service.get_reports(id)?;
    Ok(Json(reports))
}

pub fn router(state: &Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/projects/{id}/reports", get(list_project_reports))
        .merge(gated(
            Router::new().route("/reports", post(upload_report)),
            state,
            FIELD_STAFF,
        ))
}
