pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::intake::handlers as intake;
use crate::packaging::handlers as packaging;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Intake
        .route("/api/v1/briefs/parse", post(intake::handle_parse_brief))
        // Generation
        .route(
            "/api/v1/documents/kinds",
            get(generation::handle_list_kinds),
        )
        .route("/api/v1/documents/:kind", post(generation::handle_generate))
        // Session project folders
        .route(
            "/api/v1/sessions/:id/files",
            get(packaging::handle_list_files),
        )
        .route(
            "/api/v1/sessions/:id/files/:filename",
            get(packaging::handle_download_file),
        )
        .route(
            "/api/v1/sessions/:id/archive",
            get(packaging::handle_download_archive),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::layout::default_page_config;
    use crate::llm_client::{ImageGenerator, LlmError, TextGenerator};
    use crate::packaging::ProjectStore;

    struct FixedText(&'static str);

    #[async_trait]
    impl TextGenerator for FixedText {
        async fn complete(&self, _system: &str, _user: &str) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    struct NoImages;

    #[async_trait]
    impl ImageGenerator for NoImages {
        async fn generate(&self, _prompt: &str, _count: u8) -> Result<Vec<Vec<u8>>, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    fn test_state(reply: &'static str) -> AppState {
        AppState {
            text_generator: Arc::new(FixedText(reply)),
            image_generator: Arc::new(NoImages),
            projects: ProjectStore::new(),
            page_config: default_page_config(),
        }
    }

    async fn send(state: &AppState, request: Request<Body>) -> Response {
        build_router(state.clone()).oneshot(request).await.unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let state = test_state("");
        let response = send(&state, get_request("/health")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["service"], "studio-api");
    }

    #[tokio::test]
    async fn test_lists_eleven_kinds() {
        let state = test_state("");
        let response = send(&state, get_request("/api/v1/documents/kinds")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body.as_array().unwrap().len(), 11);
    }

    #[tokio::test]
    async fn test_unknown_kind_is_bad_request() {
        let state = test_state("# Doc");
        let request = post_json(
            "/api/v1/documents/press-release",
            json!({ "answers": { "client_name": "Bloom" } }),
        );
        let response = send(&state, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_blank_client_name_is_rejected() {
        let state = test_state("# Doc");
        let request = post_json(
            "/api/v1/documents/brand-voice",
            json!({ "answers": { "client_name": "   ", "industry": "skincare" } }),
        );
        let response = send(&state, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(
            body["error"]["message"],
            "Please enter at least a client / brand name"
        );
    }

    #[tokio::test]
    async fn test_blank_brief_is_rejected() {
        let state = test_state("{}");
        let response = send(&state, post_json("/api/v1/briefs/parse", json!({ "raw_brief": " " }))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_brief_parse_falls_back_to_empty_fields() {
        let state = test_state("Sorry, I can't help with that.");
        let response = send(
            &state,
            post_json("/api/v1/briefs/parse", json!({ "raw_brief": "Bloom is a skincare brand" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body.as_object().unwrap().len(), 10);
        assert_eq!(body["client_name"], "");
    }

    #[tokio::test]
    async fn test_archive_for_unknown_session_is_not_found() {
        let state = test_state("");
        let uri = format!("/api/v1/sessions/{}/archive", Uuid::new_v4());
        let response = send(&state, get_request(&uri)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_generated_pdf_is_downloadable() {
        let state = test_state("# Brand Voice\n\n- Warm \u{2014} honest");
        let response = send(
            &state,
            post_json(
                "/api/v1/documents/brand-voice",
                json!({ "answers": { "client_name": "Bloom" } }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["kind"], "brand-voice");
        assert_eq!(body["title"], "Bloom - Brand Voice Guide");
        assert_eq!(body["filename"], "Bloom_brand_voice_guide.pdf");
        assert_eq!(body["view"]["format"], "markdown");
        let session_id = body["session_id"].as_str().unwrap().to_string();

        let uri = format!("/api/v1/sessions/{session_id}/files/Bloom_brand_voice_guide.pdf");
        let response = send(&state, get_request(&uri)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Bloom_brand_voice_guide.pdf\""
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.starts_with(b"%PDF"));

        let uri = format!("/api/v1/sessions/{session_id}/archive");
        let response = send(&state, get_request(&uri)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/zip");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Bloom_project.zip\""
        );
    }

    #[tokio::test]
    async fn test_same_session_collects_files() {
        let state = test_state("# Doc");
        let session_id = Uuid::new_v4();
        for kind in ["brand-voice", "style-guide"] {
            let response = send(
                &state,
                post_json(
                    &format!("/api/v1/documents/{kind}"),
                    json!({ "session_id": session_id, "answers": { "client_name": "Bloom" } }),
                ),
            )
            .await;
            assert_eq!(response.status(), StatusCode::OK);
        }

        let uri = format!("/api/v1/sessions/{session_id}/files");
        let body = json_body(send(&state, get_request(&uri)).await).await;
        assert_eq!(
            body["files"],
            json!(["Bloom_brand_style_guide.pdf", "Bloom_brand_voice_guide.pdf"])
        );
    }
}
