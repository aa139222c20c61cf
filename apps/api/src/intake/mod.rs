//! Intake — the brand-description fields collected for one generation request,
//! the context text composed from them, and LLM-assisted auto-fill from a raw brief.

pub mod brief_parser;
pub mod context;
pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder for a blank structured field in composed context text.
pub const NOT_AVAILABLE: &str = "N/A";
/// Placeholder for blank reference links.
pub const NO_REFERENCES: &str = "None provided.";

/// Answers supplied for a single generation request. Built fresh per request, never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeAnswers {
    pub raw_brief: String,
    pub client_name: String,
    pub industry: String,
    pub target_audience: String,
    pub goals: String,
    pub brand_vibe: String,
    pub voice_tone: String,
    pub colors: String,
    pub visual_keywords: String,
    pub platforms: String,
    pub reference_links: String,
    /// Filenames only; file contents never reach the model.
    pub uploaded_files: Vec<String>,
}

/// The ten structured fields the brief parser extracts.
///
/// Always serializes with exactly these keys; missing keys and `null` values in a
/// model reply both become "".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BriefFields {
    #[serde(deserialize_with = "null_as_empty")]
    pub client_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub industry: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub target_audience: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub goals: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub brand_vibe: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub voice_tone: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub colors: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub visual_keywords: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub platforms: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub reference_links: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Trimmed value, or `None` when blank.
pub fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Trimmed value, or `"N/A"` when blank.
pub fn or_na(value: &str) -> &str {
    non_blank(value).unwrap_or(NOT_AVAILABLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answers_deserialize_with_missing_fields() {
        let answers: IntakeAnswers =
            serde_json::from_str(r#"{"client_name": "GlowNest Cosmetics"}"#).unwrap();
        assert_eq!(answers.client_name, "GlowNest Cosmetics");
        assert!(answers.raw_brief.is_empty());
        assert!(answers.uploaded_files.is_empty());
    }

    #[test]
    fn test_brief_fields_serialize_exactly_ten_keys() {
        let value = serde_json::to_value(BriefFields::default()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 10);
        assert!(object.values().all(|v| v == ""));
    }

    #[test]
    fn test_or_na_treats_whitespace_as_blank() {
        assert_eq!(or_na("   "), "N/A");
        assert_eq!(or_na(" Skincare "), "Skincare");
    }
}
