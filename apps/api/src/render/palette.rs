//! Color palette output: trailing machine-readable section removal and swatch extraction.
//!
//! Swatch extraction is a lenient line-table parser. A row is
//! `| name | role | #?HHHHHH |`: pipe-delimited, three cells, last cell six hex
//! digits with an optional `#`. Rows that do not fit are skipped, never errors.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Heading the model sometimes emits before a JSON dump of the palette.
pub const PALETTE_JSON_MARKER: &str = "Palette JSON";
/// Fenced JSON block opener.
pub const JSON_FENCE_MARKER: &str = "```json";

static SWATCH_ROW_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\|\s*([^|\n]+?)\s*\|\s*([^|\n]+?)\s*\|\s*#?([0-9A-Fa-f]{6})\s*\|")
        .expect("Invalid swatch row regex")
});

/// A display-only color chip derived from one palette table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    pub name: String,
    pub role: String,
    /// Six upper-case hex digits, no leading `#`.
    pub hex: String,
    /// Chip label, e.g. `Blush - Primary - #FF3E8E`.
    pub caption: String,
}

impl Swatch {
    fn new(name: &str, role: &str, hex: &str) -> Self {
        let (name, role, hex) = (name.trim(), role.trim(), hex.to_ascii_uppercase());
        Self {
            caption: format!("{name} - {role} - #{hex}"),
            name: name.to_string(),
            role: role.to_string(),
            hex,
        }
    }
}

/// Cuts the text at the first `Palette JSON` marker, then at the first JSON fence,
/// trimming trailing whitespace after each cut.
pub fn truncate_palette(raw: &str) -> &str {
    let mut text = raw;
    for marker in [PALETTE_JSON_MARKER, JSON_FENCE_MARKER] {
        if let Some(idx) = text.find(marker) {
            text = text[..idx].trim_end();
        }
    }
    text
}

/// Every palette table row in the text, in order of appearance.
pub fn extract_swatches(text: &str) -> Vec<Swatch> {
    SWATCH_ROW_REGEX
        .captures_iter(text)
        .map(|caps| Swatch::new(&caps[1], &caps[2], &caps[3]))
        .collect()
}
