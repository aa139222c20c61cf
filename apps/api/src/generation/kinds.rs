//! The closed set of document kinds and their display metadata.

use serde::{Deserialize, Serialize};

/// Which of the eleven generation templates a request runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    DiscoverySummary,
    StyleGuide,
    ContentCalendar,
    LogoDirections,
    LogoSketchKit,
    SiteOutline,
    ProjectProposal,
    ColorPalette,
    BrandVoice,
    InvoiceOutline,
    DomainTaglines,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 11] = [
        DocumentKind::DiscoverySummary,
        DocumentKind::StyleGuide,
        DocumentKind::LogoDirections,
        DocumentKind::LogoSketchKit,
        DocumentKind::SiteOutline,
        DocumentKind::ProjectProposal,
        DocumentKind::ColorPalette,
        DocumentKind::BrandVoice,
        DocumentKind::InvoiceOutline,
        DocumentKind::DomainTaglines,
        DocumentKind::ContentCalendar,
    ];

    /// Human label, used in PDF titles and filenames.
    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::DiscoverySummary => "Brand Discovery Summary",
            DocumentKind::StyleGuide => "Brand Style Guide",
            DocumentKind::ContentCalendar => "30-Day Content Calendar",
            DocumentKind::LogoDirections => "Logo Direction Ideas",
            DocumentKind::LogoSketchKit => "AI Logo Sketch Kit",
            DocumentKind::SiteOutline => "Website / Landing Page Outline",
            DocumentKind::ProjectProposal => "Project Summary & Proposal",
            DocumentKind::ColorPalette => "Color Palette Generator",
            DocumentKind::BrandVoice => "Brand Voice Guide",
            DocumentKind::InvoiceOutline => "Proposal → Invoice Outline",
            DocumentKind::DomainTaglines => "Domain & Tagline Ideas",
        }
    }

    /// Filename-safe slug derived from the label: lower-case, `→` as `to`, `&` as `and`,
    /// every other non-alphanumeric run collapsed to a single `_`.
    pub fn slug(self) -> String {
        let expanded = self
            .label()
            .to_lowercase()
            .replace('→', "to")
            .replace('&', "and");
        let mut slug = String::with_capacity(expanded.len());
        for ch in expanded.chars() {
            if ch.is_ascii_alphanumeric() || ch == '-' {
                slug.push(ch);
            } else if !slug.ends_with('_') {
                slug.push('_');
            }
        }
        slug.trim_matches('_').to_string()
    }
}
