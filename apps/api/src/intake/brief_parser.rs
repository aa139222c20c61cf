//! Brief Parser — extracts the ten structured intake fields from a free-form brief.
//!
//! The typed extraction returns a `Result`; `parse_brief` owns the fallback policy
//! (ten empty strings) so callers never see a failure.

use thiserror::Error;
use tracing::{info, warn};

use crate::intake::prompts::{BRIEF_PARSE_PROMPT_TEMPLATE, BRIEF_PARSE_SYSTEM};
use crate::intake::BriefFields;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{strip_json_fences, LlmError, TextGenerator};

#[derive(Debug, Error)]
pub enum BriefParseError {
    #[error("brief extraction call failed: {0}")]
    Transport(#[from] LlmError),

    #[error("brief extraction reply is not the expected JSON object: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("brief extraction reply is JSON but not an object")]
    NotAnObject,
}

/// Calls the model and decodes its reply into `BriefFields`.
///
/// Missing keys become empty strings and unknown keys are ignored; anything that is not
/// an object of string values is a decode error.
pub async fn extract_brief_fields(
    llm: &dyn TextGenerator,
    raw_brief: &str,
) -> Result<BriefFields, BriefParseError> {
    let system = format!("{BRIEF_PARSE_SYSTEM}\n\n{JSON_ONLY_INSTRUCTION}");
    let prompt = BRIEF_PARSE_PROMPT_TEMPLATE.replace("{raw_brief}", raw_brief);
    let reply = llm.complete(&system, &prompt).await?;
    decode_brief_fields(&reply)
}

pub fn decode_brief_fields(reply: &str) -> Result<BriefFields, BriefParseError> {
    let value: serde_json::Value = serde_json::from_str(strip_json_fences(reply))?;
    // Derived struct decoding would also accept a positional array.
    if !value.is_object() {
        return Err(BriefParseError::NotAnObject);
    }
    Ok(serde_json::from_value(value)?)
}

/// Auto-fills intake fields from a brief. Never fails; degrades to all-empty fields.
pub async fn parse_brief(llm: &dyn TextGenerator, raw_brief: &str) -> BriefFields {
    match extract_brief_fields(llm, raw_brief).await {
        Ok(fields) => {
            info!("Brief parsed into structured fields");
            fields
        }
        Err(e) => {
            warn!("Brief auto-fill fell back to empty fields: {e}");
            BriefFields::default()
        }
    }
}
