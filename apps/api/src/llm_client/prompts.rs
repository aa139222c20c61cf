// Shared prompt fragments.
// Each module that calls the model defines its own prompts.rs alongside it;
// this file only holds the cross-cutting pieces they splice in.

/// Appended to system prompts whose reply must be machine-readable.
pub const JSON_ONLY_INSTRUCTION: &str = "\
Return the result as pure JSON ONLY.
Do NOT include any extra text before or after the JSON.
Do NOT format it as markdown and do NOT wrap it in code fences.";

/// Appended to every markdown document prompt.
pub const MARKDOWN_INSTRUCTION: &str =
    "Write in markdown with clear headings and bullet points.";

/// Placeholder replaced with the composed intake context in every user prompt.
pub const CONTEXT_PLACEHOLDER: &str = "{context}";
