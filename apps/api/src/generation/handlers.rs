//! Axum route handlers for the Generation API.

use axum::{
    extract::{Path, State},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::generator::generate_document;
use crate::generation::kinds::DocumentKind;
use crate::intake::{non_blank, IntakeAnswers};
use crate::render::RenderedView;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct KindSummary {
    pub kind: DocumentKind,
    pub label: &'static str,
    pub slug: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Session to file the PDF under. A new one is minted when absent.
    pub session_id: Option<Uuid>,
    #[serde(default)]
    pub answers: IntakeAnswers,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub session_id: Uuid,
    pub kind: DocumentKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub view: RenderedView,
    pub plain_text: String,
    pub images_base64: Vec<String>,
    pub warnings: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/documents/kinds
pub async fn handle_list_kinds() -> Json<Vec<KindSummary>> {
    Json(
        DocumentKind::ALL
            .iter()
            .map(|&kind| KindSummary {
                kind,
                label: kind.label(),
                slug: kind.slug(),
            })
            .collect(),
    )
}

/// POST /api/v1/documents/:kind
///
/// Generates one document, files its PDF in the session folder, and returns
/// the rendered view plus any moodboard images.
pub async fn handle_generate(
    State(state): State<AppState>,
    Path(kind): Path<DocumentKind>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    if non_blank(&request.answers.client_name).is_none() {
        return Err(AppError::Validation(
            "Please enter at least a client / brand name".to_string(),
        ));
    }

    let session_id = request.session_id.unwrap_or_else(Uuid::new_v4);
    let generated = generate_document(
        state.text_generator.as_ref(),
        state.image_generator.as_ref(),
        kind,
        &request.answers,
        &state.page_config,
    )
    .await?;

    let filename = match generated.document {
        Some(document) => {
            let filename = document.filename.clone();
            state
                .projects
                .insert(session_id, &request.answers.client_name, document)?;
            Some(filename)
        }
        None => None,
    };

    Ok(Json(GenerateResponse {
        session_id,
        kind: generated.kind,
        title: generated.title,
        filename,
        view: generated.view,
        plain_text: generated.plain_text,
        images_base64: generated.images.iter().map(|img| STANDARD.encode(img)).collect(),
        warnings: generated.warnings,
        generated_at: Utc::now(),
    }))
}
