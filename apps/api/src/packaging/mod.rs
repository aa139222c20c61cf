//! Document Packager: PDF rendering, zip bundling, and the per-session project
//! folders that hold every document produced in a session.

pub mod archive;
pub mod handlers;
pub mod pdf;
pub mod sanitize;
pub mod store;

use bytes::Bytes;
use thiserror::Error;

use crate::generation::kinds::DocumentKind;
use crate::intake::non_blank;
use crate::layout::PageConfig;

pub use store::ProjectStore;

#[derive(Debug, Error)]
pub enum PackagingError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A finished downloadable file.
#[derive(Debug, Clone, PartialEq)]
pub struct PackagedDocument {
    pub filename: String,
    pub bytes: Bytes,
}

/// Replaces path separators so a user-supplied name can't escape the archive root.
pub fn sanitize_filename_component(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect()
}

pub fn document_title(kind: DocumentKind, client_name: &str) -> String {
    format!("{} - {}", client_name.trim(), kind.label())
}

pub fn document_filename(kind: DocumentKind, client_name: &str) -> String {
    let client = non_blank(client_name).unwrap_or("brand");
    format!("{}_{}.pdf", sanitize_filename_component(client), kind.slug())
}

/// Renders `plain_text` to a titled PDF named after the client and kind.
pub fn package_document(
    kind: DocumentKind,
    client_name: &str,
    plain_text: &str,
    config: &PageConfig,
) -> Result<PackagedDocument, PackagingError> {
    let title = document_title(kind, client_name);
    let bytes = pdf::to_document(&title, plain_text, config)?;
    Ok(PackagedDocument {
        filename: document_filename(kind, client_name),
        bytes: Bytes::from(bytes),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::default_page_config;

    #[test]
    fn test_title_and_filename() {
        assert_eq!(
            document_title(DocumentKind::BrandVoice, "Bloom"),
            "Bloom - Brand Voice Guide"
        );
        assert_eq!(
            document_filename(DocumentKind::BrandVoice, "Bloom"),
            "Bloom_brand_voice_guide.pdf"
        );
    }

    #[test]
    fn test_blank_client_falls_back_to_brand() {
        assert_eq!(
            document_filename(DocumentKind::StyleGuide, "   "),
            "brand_brand_style_guide.pdf"
        );
    }

    #[test]
    fn test_path_separators_are_replaced() {
        assert_eq!(
            document_filename(DocumentKind::BrandVoice, "../etc/passwd"),
            ".._etc_passwd_brand_voice_guide.pdf"
        );
        assert_eq!(sanitize_filename_component("a\\b"), "a_b");
    }

    #[test]
    fn test_package_document_builds_pdf() {
        let doc = package_document(
            DocumentKind::ContentCalendar,
            "Bloom",
            "Day  Platform",
            &default_page_config(),
        )
        .unwrap();
        assert_eq!(doc.filename, "Bloom_30-day_content_calendar.pdf");
        assert!(doc.bytes.starts_with(b"%PDF"));
    }
}
