//! Plain-text to PDF: a bold title block followed by wrapped body text, flowing
//! onto as many A4 pages as needed. Uses the non-embedded Helvetica faces with
//! WinAnsi encoding, so every string is sanitized to Latin-1 first.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use tracing::debug;

use crate::layout::{get_metrics, FontFamily, PageConfig};
use crate::packaging::sanitize::{sanitize, to_latin1};
use crate::packaging::PackagingError;

const PRODUCER: &str = "studio";

/// One line of text at a fixed position on a page.
#[derive(Debug, Clone, PartialEq)]
struct PlacedLine {
    font: FontFamily,
    size_pt: i64,
    x_pt: i64,
    baseline_pt: i64,
    text: String,
}

/// Vertical cursor that starts a new page when the bottom margin is reached.
struct PageFlow<'a> {
    config: &'a PageConfig,
    pages: Vec<Vec<PlacedLine>>,
    y_pt: i64,
}

impl<'a> PageFlow<'a> {
    fn new(config: &'a PageConfig) -> Self {
        Self {
            config,
            pages: vec![Vec::new()],
            y_pt: config.page_height_pt - config.margin_pt,
        }
    }

    fn place(&mut self, font: FontFamily, size_pt: i64, leading_pt: i64, text: String) {
        let page_has_lines = self.pages.last().is_some_and(|p| !p.is_empty());
        if page_has_lines && self.y_pt - leading_pt < self.config.bottom_margin_pt {
            self.pages.push(Vec::new());
            self.y_pt = self.config.page_height_pt - self.config.margin_pt;
        }
        // Center the glyphs vertically in the line box.
        let baseline_pt = self.y_pt - leading_pt + (leading_pt - size_pt) / 2 + size_pt * 3 / 10;
        if let Some(page) = self.pages.last_mut() {
            page.push(PlacedLine {
                font,
                size_pt,
                x_pt: self.config.margin_pt,
                baseline_pt,
                text,
            });
        }
        self.y_pt -= leading_pt;
    }

    fn skip(&mut self, gap_pt: i64) {
        self.y_pt -= gap_pt;
    }

    fn wrapped(&mut self, font: FontFamily, size_pt: i64, leading_pt: i64, text: &str) {
        let width = self.config.text_width_pt();
        for line in text.split('\n') {
            let line = line.trim_end_matches('\r');
            for wrapped in get_metrics(font).wrap_line(line, size_pt as f32, width) {
                self.place(font, size_pt, leading_pt, wrapped);
            }
        }
    }
}

fn lay_out(title: &str, body: &str, config: &PageConfig) -> Vec<Vec<PlacedLine>> {
    let mut flow = PageFlow::new(config);
    flow.wrapped(
        FontFamily::HelveticaBold,
        config.title_font_size_pt,
        config.title_leading_pt,
        title,
    );
    flow.skip(config.title_gap_pt);
    flow.wrapped(
        FontFamily::Helvetica,
        config.body_font_size_pt,
        config.body_leading_pt,
        body,
    );
    flow.pages
}

fn resource_name(font: FontFamily) -> &'static str {
    match font {
        FontFamily::Helvetica => "F1",
        FontFamily::HelveticaBold => "F2",
    }
}

fn page_operations(lines: &[PlacedLine]) -> Vec<Operation> {
    let mut operations = Vec::with_capacity(lines.len() * 5);
    for line in lines.iter().filter(|l| !l.text.is_empty()) {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new(
            "Tf",
            vec![resource_name(line.font).into(), line.size_pt.into()],
        ));
        operations.push(Operation::new(
            "Td",
            vec![line.x_pt.into(), line.baseline_pt.into()],
        ));
        operations.push(Operation::new(
            "Tj",
            vec![Object::string_literal(to_latin1(&line.text))],
        ));
        operations.push(Operation::new("ET", vec![]));
    }
    operations
}

/// Renders a title and body into PDF bytes. Any input, including an empty body,
/// produces a valid document; characters outside Latin-1 are dropped silently.
pub fn to_document(title: &str, body: &str, config: &PageConfig) -> Result<Vec<u8>, PackagingError> {
    let title = sanitize(title);
    let body = sanitize(body);
    let pages = lay_out(&title, &body, config);

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut fonts = lopdf::Dictionary::new();
    for font in [FontFamily::Helvetica, FontFamily::HelveticaBold] {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(resource_name(font), font_id);
    }
    let resources_id = doc.add_object(dictionary! {
        "Font" => fonts,
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in &pages {
        let content = Content {
            operations: page_operations(page),
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(config.page_width_pt),
                Object::Integer(config.page_height_pt),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(to_latin1(&title)),
        "Producer" => Object::string_literal(PRODUCER),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;

    debug!("Packaged PDF: {} pages, {} bytes", page_count, bytes.len());
    Ok(bytes)
}
