// Prompt constants for brief auto-fill.

/// System prompt for brief extraction. `JSON_ONLY_INSTRUCTION` is appended at call time.
pub const BRIEF_PARSE_SYSTEM: &str = r#"You are a helpful assistant that turns a messy project brief into structured fields.

Return ONLY valid JSON with this exact structure:

{
  "client_name": "",
  "industry": "",
  "target_audience": "",
  "goals": "",
  "brand_vibe": "",
  "voice_tone": "",
  "colors": "",
  "visual_keywords": "",
  "platforms": "",
  "reference_links": ""
}

Use empty strings ("") if something is missing or unclear.
Every value must be a single string, never a list or an object.
Do NOT add any extra keys or commentary."#;

/// Brief extraction prompt. Replace `{raw_brief}` before sending.
pub const BRIEF_PARSE_PROMPT_TEMPLATE: &str = "Parse this brief into structured fields.

BRIEF:
{raw_brief}";
