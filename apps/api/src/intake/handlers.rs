use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::intake::brief_parser::parse_brief;
use crate::intake::BriefFields;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseBriefRequest {
    pub raw_brief: String,
}

/// POST /api/v1/briefs/parse
///
/// Auto-fills the structured intake fields from a pasted brief.
/// Model failures degrade to empty fields rather than an error response.
pub async fn handle_parse_brief(
    State(state): State<AppState>,
    Json(request): Json<ParseBriefRequest>,
) -> Result<Json<BriefFields>, AppError> {
    if request.raw_brief.trim().is_empty() {
        return Err(AppError::Validation(
            "Please paste a brief first so the fields can be auto-filled".to_string(),
        ));
    }

    let fields = parse_brief(state.text_generator.as_ref(), &request.raw_brief).await;
    Ok(Json(fields))
}
