//! PDF renderer built on `printpdf` 0.8 with the standard built-in fonts.
//!
//! printpdf 0.8 is data-oriented: each page is a `Vec<Op>`, and the document
//! is serialised in one call to `PdfDocument::save`.

use printpdf::color::Color;
use printpdf::graphics::{LinePoint, PaintMode, Point, Polygon, PolygonRing, WindingOrder};
use printpdf::ops::Op;
use printpdf::{BuiltinFont, Mm, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Pt, TextItem};
use tracing::{debug, info};

use crate::layout::blocks::LayoutBlock;
use crate::layout::flow::{flow, FilledRect, PageLayout, PositionedLine};
use crate::render::{DocumentRenderer, PageGeometry, RenderError};
use crate::styles::{FontFamily, FormatSpec, Rgb, StyleSheet};

const MM_PER_PT: f32 = 25.4 / 72.0;

/// Renders blocks to PDF bytes.
#[derive(Debug, Clone)]
pub struct PdfRenderer {
    title: String,
}

impl PdfRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        PdfRenderer {
            title: title.into(),
        }
    }
}

impl Default for PdfRenderer {
    fn default() -> Self {
        PdfRenderer::new("Curriculum Vitae")
    }
}

impl DocumentRenderer for PdfRenderer {
    fn render(
        &self,
        blocks: &[LayoutBlock],
        stylesheet: &StyleSheet,
        geometry: &PageGeometry,
    ) -> Result<Vec<u8>, RenderError> {
        let layouts = flow(blocks, stylesheet, geometry);
        let page_w = Mm(geometry.width() * MM_PER_PT);
        let page_h = Mm(geometry.height() * MM_PER_PT);

        let pages: Vec<PdfPage> = layouts
            .iter()
            .map(|layout| PdfPage::new(page_w, page_h, page_ops(layout)))
            .collect();
        let page_count = pages.len();

        let mut doc = PdfDocument::new(&self.title);
        doc.with_pages(pages);

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            debug!(count = warnings.len(), "printpdf reported warnings");
        }
        if bytes.is_empty() {
            return Err(RenderError::Pdf("serialiser produced no output".to_string()));
        }

        info!(
            theme = %stylesheet.theme(),
            page_size = ?geometry.size,
            pages = page_count,
            bytes = bytes.len(),
            "Rendered PDF"
        );
        Ok(bytes)
    }
}

fn page_ops(layout: &PageLayout) -> Vec<Op> {
    let mut ops = Vec::new();
    // Backgrounds first so text paints over them.
    for rect in &layout.rects {
        push_rect(&mut ops, rect);
    }
    for line in &layout.lines {
        push_line(&mut ops, line);
    }
    ops
}

fn pdf_color(c: Rgb) -> Color {
    let (r, g, b) = c.to_unit();
    Color::Rgb(printpdf::Rgb::new(r, g, b, None))
}

fn point(x: f32, y: f32) -> LinePoint {
    LinePoint {
        p: Point { x: Pt(x), y: Pt(y) },
        bezier: false,
    }
}

fn push_rect(ops: &mut Vec<Op>, rect: &FilledRect) {
    let polygon = Polygon {
        rings: vec![PolygonRing {
            points: vec![
                point(rect.x, rect.y),
                point(rect.x + rect.width, rect.y),
                point(rect.x + rect.width, rect.y + rect.height),
                point(rect.x, rect.y + rect.height),
            ],
        }],
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    };
    ops.push(Op::SetFillColor {
        col: pdf_color(rect.color),
    });
    ops.push(Op::DrawPolygon { polygon });
}

fn push_line(ops: &mut Vec<Op>, line: &PositionedLine) {
    let font = builtin_font(&line.format);
    ops.push(Op::StartTextSection);
    ops.push(Op::SetFillColor {
        col: pdf_color(line.format.color),
    });
    ops.push(Op::SetTextCursor {
        pos: Point {
            x: Pt(line.x),
            y: Pt(line.y),
        },
    });
    ops.push(Op::SetFontSizeBuiltinFont {
        size: Pt(line.format.size),
        font,
    });
    ops.push(Op::WriteTextBuiltinFont {
        items: vec![TextItem::Text(line.text.clone())],
        font,
    });
    ops.push(Op::EndTextSection);
}

/// Maps a format to one of the fourteen standard PDF fonts.
pub fn builtin_font(format: &FormatSpec) -> BuiltinFont {
    match (format.font, format.bold, format.italic) {
        (FontFamily::Helvetica, false, false) => BuiltinFont::Helvetica,
        (FontFamily::Helvetica, true, false) => BuiltinFont::HelveticaBold,
        (FontFamily::Helvetica, false, true) => BuiltinFont::HelveticaOblique,
        (FontFamily::Helvetica, true, true) => BuiltinFont::HelveticaBoldOblique,
        (FontFamily::Times, false, false) => BuiltinFont::TimesRoman,
        (FontFamily::Times, true, false) => BuiltinFont::TimesBold,
        (FontFamily::Times, false, true) => BuiltinFont::TimesItalic,
        (FontFamily::Times, true, true) => BuiltinFont::TimesBoldItalic,
    }
}
