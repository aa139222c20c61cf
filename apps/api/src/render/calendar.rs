//! 30-day content calendar: the one bit-exact wire contract in the system.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::llm_client::strip_json_fences;

pub const CALENDAR_DAYS: usize = 30;

/// Column headers, in the fixed display order.
pub const CALENDAR_COLUMNS: [&str; 6] = [
    "Day",
    "Platform",
    "Post Type",
    "Hook / Caption Idea",
    "Visual Direction",
    "CTA",
];

/// One day of the calendar as returned by the model. All six keys are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub day: i64,
    pub platform: String,
    pub post_type: String,
    pub hook: String,
    pub visual_direction: String,
    pub cta: String,
}

impl CalendarEntry {
    fn cells(&self) -> Vec<String> {
        vec![
            self.day.to_string(),
            self.platform.clone(),
            self.post_type.clone(),
            self.hook.clone(),
            self.visual_direction.clone(),
            self.cta.clone(),
        ]
    }
}

/// Decodes the model reply as a JSON array of calendar entries.
///
/// A count other than 30 is accepted but logged; only shape violations are errors.
pub fn decode_calendar(raw: &str) -> Result<Vec<CalendarEntry>, serde_json::Error> {
    let entries: Vec<CalendarEntry> = serde_json::from_str(strip_json_fences(raw))?;
    if entries.len() != CALENDAR_DAYS {
        warn!(
            "Calendar decoded with {} entries (expected {CALENDAR_DAYS})",
            entries.len()
        );
    }
    Ok(entries)
}

/// Rows of display cells in input order.
pub fn calendar_rows(entries: &[CalendarEntry]) -> Vec<Vec<String>> {
    entries.iter().map(CalendarEntry::cells).collect()
}

/// Fixed-width text rendering: a header line, then one line per row,
/// cells left-aligned and separated by two spaces.
pub fn format_text_table(columns: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let format_line = |cells: &[String]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_line(columns));
    lines.extend(rows.iter().map(|row| format_line(row.as_slice())));
    lines.join("\n")
}
