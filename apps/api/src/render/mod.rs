//! Output Renderer — turns raw model text into a display view and a plain-text
//! form for packaging.
//!
//! Decode failures are not errors here: the calendar falls back to the raw text.

pub mod calendar;
pub mod palette;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::generation::kinds::DocumentKind;
use calendar::{calendar_rows, decode_calendar, format_text_table, CALENDAR_COLUMNS};
use palette::{extract_swatches, truncate_palette, Swatch};

pub const CALENDAR_FALLBACK_NOTICE: &str =
    "Couldn't parse structured calendar, showing raw text instead.";

/// What a front end shows for one generated document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum RenderedView {
    Table {
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Palette {
        markdown: String,
        swatches: Vec<Swatch>,
    },
    Markdown {
        markdown: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        notice: Option<String>,
    },
}

impl RenderedView {
    fn markdown(text: &str) -> Self {
        RenderedView::Markdown {
            markdown: text.to_string(),
            notice: None,
        }
    }

    /// The text that goes into the packaged document.
    pub fn to_plain_text(&self) -> String {
        match self {
            RenderedView::Table { columns, rows } => format_text_table(columns, rows),
            RenderedView::Palette { markdown, .. } | RenderedView::Markdown { markdown, .. } => {
                markdown.clone()
            }
        }
    }
}

/// Renders raw model output for the given kind.
pub fn render(kind: DocumentKind, raw: &str) -> RenderedView {
    match kind {
        DocumentKind::ContentCalendar => render_calendar(raw),
        DocumentKind::ColorPalette => {
            let markdown = truncate_palette(raw);
            RenderedView::Palette {
                markdown: markdown.to_string(),
                swatches: extract_swatches(markdown),
            }
        }
        _ => RenderedView::markdown(raw),
    }
}

fn render_calendar(raw: &str) -> RenderedView {
    match decode_calendar(raw) {
        Ok(entries) => RenderedView::Table {
            columns: CALENDAR_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: calendar_rows(&entries),
        },
        Err(e) => {
            warn!("Calendar reply did not decode, showing raw text: {e}");
            RenderedView::Markdown {
                markdown: raw.to_string(),
                notice: Some(CALENDAR_FALLBACK_NOTICE.to_string()),
            }
        }
    }
}
