//! Flows a block sequence onto fixed-size pages.
//!
//! Pure geometry: no PDF types here. The result is a list of pages holding
//! positioned text lines and filled rectangles in PDF user space (points,
//! origin at the bottom-left corner).
//!
//! Rules:
//! - text is wrapped greedily to the content width minus indents;
//! - `space_before` is dropped at the top of a page, as are spacers;
//! - a line that would cross the bottom margin starts a new page;
//! - a spacer or `space_after` that overflows ends the page;
//! - blocks with a background are kept together on one page when they fit,
//!   taller ones get one background rect per page;
//! - a page is only opened once something is placed on it;
//! - the result always has at least one page.

use crate::layout::blocks::LayoutBlock;
use crate::layout::font_metrics::wrap_text;
use crate::render::PageGeometry;
use crate::styles::{FormatSpec, Rgb, Role, StyleSheet};

/// Marker drawn before each bullet item.
pub const BULLET: &str = "-";

/// Distance between the bullet marker and the item text.
const BULLET_GAP: f32 = 8.0;

/// Slack for float accumulation when testing fit.
const EPSILON: f32 = 0.01;

#[derive(Debug, Clone, PartialEq)]
pub struct PositionedLine {
    pub text: String,
    pub x: f32,
    /// Baseline.
    pub y: f32,
    pub format: FormatSpec,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilledRect {
    pub x: f32,
    /// Bottom edge.
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Rgb,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub rects: Vec<FilledRect>,
    pub lines: Vec<PositionedLine>,
}

/// Lays out `blocks` on pages of `geometry`.
pub fn flow(blocks: &[LayoutBlock], stylesheet: &StyleSheet, geometry: &PageGeometry) -> Vec<PageLayout> {
    let mut flow = Flow::new(geometry);
    for block in blocks {
        match block {
            LayoutBlock::Heading { text, role } | LayoutBlock::Paragraph { text, role } => {
                flow.text_block(text, stylesheet.get(*role));
            }
            LayoutBlock::BulletList { items, role } => {
                flow.bullet_list(items, stylesheet.get(*role), stylesheet.get(Role::BulletItem));
            }
            LayoutBlock::Spacer(size) => flow.gap(*size),
        }
    }
    flow.pages
}

struct Flow<'g> {
    geometry: &'g PageGeometry,
    pages: Vec<PageLayout>,
    /// Distance consumed below the top margin on the current page.
    cursor: f32,
    /// An overflowing gap ended the page; the next page opens only when
    /// something is placed on it.
    pending_break: bool,
}

impl<'g> Flow<'g> {
    fn new(geometry: &'g PageGeometry) -> Self {
        Flow {
            geometry,
            pages: vec![PageLayout::default()],
            cursor: 0.0,
            pending_break: false,
        }
    }

    fn at_top(&self) -> bool {
        self.pending_break || self.cursor <= 0.0
    }

    fn fits(&self, height: f32) -> bool {
        self.cursor + height <= self.geometry.content_height() + EPSILON
    }

    fn new_page(&mut self) {
        self.pages.push(PageLayout::default());
        self.cursor = 0.0;
        self.pending_break = false;
    }

    /// Opens a new page if a pending break exists or `height` does not fit.
    fn ensure_room(&mut self, height: f32) {
        if self.pending_break || (!self.at_top() && !self.fits(height)) {
            self.new_page();
        }
    }

    fn current_page(&self) -> usize {
        self.pages.len() - 1
    }

    fn page(&mut self) -> &mut PageLayout {
        let last = self.current_page();
        &mut self.pages[last]
    }

    /// PDF y coordinate for a distance below the top margin.
    fn to_pdf_y(&self, offset: f32) -> f32 {
        self.geometry.height() - self.geometry.margins.top - offset
    }

    /// Vertical gap: dropped at the top of a page, ends the page on overflow.
    fn gap(&mut self, size: f32) {
        if size <= 0.0 || self.at_top() {
            return;
        }
        if self.fits(size) {
            self.cursor += size;
        } else {
            self.pending_break = true;
        }
    }

    /// Places one line at the cursor, breaking the page first if needed.
    fn place_line(&mut self, text: String, x: f32, format: &FormatSpec) {
        self.ensure_room(format.leading);
        let y = self.to_pdf_y(self.cursor + format.size);
        self.page().lines.push(PositionedLine {
            text,
            x,
            y,
            format: *format,
        });
        self.cursor += format.leading;
    }

    /// Background rect spanning `top..bottom` below the top margin of `page`,
    /// clipped to the content area.
    fn push_rect(&mut self, page: usize, top: f32, bottom: f32, x: f32, width: f32, color: Rgb) {
        let bottom = bottom.min(self.geometry.content_height());
        if bottom <= top {
            return;
        }
        let rect = FilledRect {
            x,
            y: self.to_pdf_y(bottom),
            width,
            height: bottom - top,
            color,
        };
        self.pages[page].rects.push(rect);
    }

    fn text_block(&mut self, text: &str, format: &FormatSpec) {
        let text = format.text_transform.apply(text);
        let padding = if format.background.is_some() { format.padding } else { 0.0 };
        let box_width = self.geometry.content_width() - format.left_indent - format.right_indent;
        let lines = wrap_text(format, &text, box_width - 2.0 * padding);
        if lines.is_empty() {
            return;
        }

        self.gap(format.space_before);
        let x = self.geometry.margins.left + format.left_indent;

        match format.background {
            Some(color) => {
                // Kept together when it fits on a page; otherwise the box is
                // split into one rect per page.
                let height = lines.len() as f32 * format.leading + 2.0 * padding;
                self.ensure_room(height);
                let mut segment_page = self.current_page();
                let mut segment_top = self.cursor;
                self.cursor += padding;
                for line in lines {
                    let bottom = self.cursor;
                    self.ensure_room(format.leading);
                    if self.current_page() != segment_page {
                        self.push_rect(segment_page, segment_top, bottom, x, box_width, color);
                        segment_page = self.current_page();
                        segment_top = self.cursor;
                    }
                    self.place_line(line, x + padding, format);
                }
                self.cursor = (self.cursor + padding).min(self.geometry.content_height());
                self.push_rect(segment_page, segment_top, self.cursor, x, box_width, color);
            }
            None => {
                for line in lines {
                    self.place_line(line, x, format);
                }
            }
        }

        self.gap(format.space_after);
    }

    fn bullet_list(&mut self, items: &[String], format: &FormatSpec, bullet: &FormatSpec) {
        if items.is_empty() {
            return;
        }
        let indent = format.left_indent.max(bullet.left_indent);
        let marker_x = self.geometry.margins.left + (indent - BULLET_GAP).max(0.0);
        let text_x = self.geometry.margins.left + indent;
        let width = self.geometry.content_width() - indent - format.right_indent;

        self.gap(format.space_before);
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.gap(bullet.space_after);
            }
            let lines = wrap_text(format, item, width);
            for (j, line) in lines.into_iter().enumerate() {
                self.place_line(line, text_x, format);
                if j == 0 {
                    // Marker shares the baseline of the item's first line.
                    let page = self.page();
                    if let Some(first) = page.lines.last().cloned() {
                        page.lines.push(PositionedLine {
                            text: BULLET.to_string(),
                            x: marker_x,
                            ..first
                        });
                    }
                }
            }
        }
        self.gap(format.space_after);
    }
}
