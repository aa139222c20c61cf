use std::sync::Arc;

use crate::layout::PageConfig;
use crate::llm_client::{ImageGenerator, TextGenerator};
use crate::packaging::ProjectStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Chat-completion client. Stubbed in tests.
    pub text_generator: Arc<dyn TextGenerator>,
    /// Moodboard image client, only used by the logo sketch kit.
    pub image_generator: Arc<dyn ImageGenerator>,
    pub projects: ProjectStore,
    /// Page geometry and font sizes for packaged PDFs.
    pub page_config: PageConfig,
}
