//! Axum route handlers for session project folders.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

const PDF_CONTENT_TYPE: &str = "application/pdf";
const ZIP_CONTENT_TYPE: &str = "application/zip";

#[derive(Debug, Serialize)]
pub struct ListFilesResponse {
    pub session_id: Uuid,
    pub files: Vec<String>,
}

fn attachment(content_type: &'static str, filename: &str, body: impl IntoResponse) -> Response {
    let disposition = format!("attachment; filename=\"{}\"", filename.replace('"', "'"));
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response()
}

/// GET /api/v1/sessions/:id/files
pub async fn handle_list_files(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ListFilesResponse>, AppError> {
    let files = state.projects.list(session_id)?;
    Ok(Json(ListFilesResponse { session_id, files }))
}

/// GET /api/v1/sessions/:id/files/:filename
pub async fn handle_download_file(
    State(state): State<AppState>,
    Path((session_id, filename)): Path<(Uuid, String)>,
) -> Result<Response, AppError> {
    let bytes = state.projects.file(session_id, &filename)?;
    Ok(attachment(PDF_CONTENT_TYPE, &filename, bytes))
}

/// GET /api/v1/sessions/:id/archive
///
/// Zips every PDF produced in the session.
pub async fn handle_download_archive(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Response, AppError> {
    let (filename, bytes) = state.projects.archive(session_id)?;
    tracing::info!("Archive {} for session {}: {} bytes", filename, session_id, bytes.len());
    Ok(attachment(ZIP_CONTENT_TYPE, &filename, bytes))
}
