//! Document generation — orchestrates one kind end to end.
//!
//! Flow: build context → prompt lookup → text model → render →
//!       (sketch kit only) moodboard images → package PDF.
//!
//! Only the text call is fatal. Image failures become warnings.

use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::kinds::DocumentKind;
use crate::generation::prompts::prompt_spec;
use crate::intake::context::build_context_text;
use crate::intake::{non_blank, IntakeAnswers};
use crate::layout::PageConfig;
use crate::llm_client::{ImageGenerator, TextGenerator};
use crate::packaging::{document_title, package_document, PackagedDocument};
use crate::render::{render, RenderedView};

/// Number of moodboard images requested for the logo sketch kit.
pub const MOODBOARD_IMAGE_COUNT: u8 = 3;

const IMAGE_FALLBACK_GUIDANCE: &str =
    "You can still paste the text prompts above into DALL-E or Midjourney manually.";

/// Everything one generation produces.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub kind: DocumentKind,
    pub title: String,
    pub view: RenderedView,
    pub plain_text: String,
    pub images: Vec<Vec<u8>>,
    pub warnings: Vec<String>,
    /// Absent when the model returned only whitespace.
    pub document: Option<PackagedDocument>,
}

/// Image prompt for the sketch-kit moodboard.
pub fn moodboard_prompt(answers: &IntakeAnswers) -> String {
    let client = non_blank(&answers.client_name).unwrap_or("the brand");
    let industry = non_blank(&answers.industry)
        .map(|industry| format!(" in {industry}"))
        .unwrap_or_default();
    format!(
        "Logo moodboard for {client}{industry}. Brand vibe: {}. Colors: {}. \
         Visual keywords: {}. Show 2D flat logo explorations, clean vector style, \
         centered composition.",
        answers.brand_vibe.trim(),
        answers.colors.trim(),
        answers.visual_keywords.trim(),
    )
}

/// Runs the full pipeline for one kind.
pub async fn generate_document(
    text: &dyn TextGenerator,
    images: &dyn ImageGenerator,
    kind: DocumentKind,
    answers: &IntakeAnswers,
    page_config: &PageConfig,
) -> Result<GeneratedDocument, AppError> {
    // Step 1: Context and prompts
    let context = build_context_text(answers);
    let spec = prompt_spec(kind);

    // Step 2: Text generation
    info!("Generating {} for {}", kind.label(), answers.client_name.trim());
    let raw = text
        .complete(&spec.system_prompt(), &spec.user_prompt(&context))
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    // Step 3: Render
    let view = render(kind, &raw);
    let plain_text = view.to_plain_text();

    // Step 4: Moodboard images (best effort)
    let mut warnings = Vec::new();
    if let RenderedView::Markdown { notice: Some(notice), .. } = &view {
        warnings.push(notice.clone());
    }
    let mut generated_images = Vec::new();
    if kind == DocumentKind::LogoSketchKit {
        match images
            .generate(&moodboard_prompt(answers), MOODBOARD_IMAGE_COUNT)
            .await
        {
            Ok(buffers) => {
                info!("Moodboard produced {} images", buffers.len());
                generated_images = buffers;
            }
            Err(e) => {
                warn!("Moodboard generation failed: {e}");
                warnings.push(format!("Image generation failed: {e}. {IMAGE_FALLBACK_GUIDANCE}"));
            }
        }
    }

    // Step 5: Package
    let document = if plain_text.trim().is_empty() {
        warn!("{} came back blank, skipping PDF", kind.label());
        None
    } else {
        Some(package_document(kind, &answers.client_name, &plain_text, page_config)?)
    };

    Ok(GeneratedDocument {
        kind,
        title: document_title(kind, &answers.client_name),
        view,
        plain_text,
        images: generated_images,
        warnings,
        document,
    })
}
