//! Document rendering: page geometry and the renderer seam.

pub mod pdf;

use serde::Serialize;
use thiserror::Error;

use crate::layout::blocks::LayoutBlock;
use crate::styles::StyleSheet;

pub use pdf::PdfRenderer;

/// Points per centimetre.
const PT_PER_CM: f32 = 72.0 / 2.54;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF generation failed: {0}")]
    Pdf(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Page geometry
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageSize {
    A4,
    Letter,
}

impl PageSize {
    /// Exact, case-insensitive match.
    pub fn parse(name: &str) -> Option<PageSize> {
        match name.trim().to_ascii_lowercase().as_str() {
            "a4" => Some(PageSize::A4),
            "letter" => Some(PageSize::Letter),
            _ => None,
        }
    }

    /// Like [`PageSize::parse`], but unknown names fall back to A4.
    pub fn from_name(name: &str) -> PageSize {
        Self::parse(name).unwrap_or_else(|| {
            tracing::warn!(page_size = name, "Unknown page size, using A4");
            PageSize::A4
        })
    }

    /// (width, height) in points.
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::Letter => (612.0, 792.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margins {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Margins {
            left: 2.0 * PT_PER_CM,
            right: PT_PER_CM,
            top: PT_PER_CM,
            bottom: 2.0 * PT_PER_CM,
        }
    }
}

/// Page size plus margins. All lengths in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageGeometry {
    pub size: PageSize,
    pub margins: Margins,
}

impl PageGeometry {
    pub fn new(size: PageSize) -> Self {
        PageGeometry {
            size,
            margins: Margins::default(),
        }
    }

    pub fn width(&self) -> f32 {
        self.size.dimensions_pt().0
    }

    pub fn height(&self) -> f32 {
        self.size.dimensions_pt().1
    }

    pub fn content_width(&self) -> f32 {
        self.width() - self.margins.left - self.margins.right
    }

    pub fn content_height(&self) -> f32 {
        self.height() - self.margins.top - self.margins.bottom
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Renderer seam
// ────────────────────────────────────────────────────────────────────────────

/// Turns an ordered block sequence into document bytes. Implementations own
/// line wrapping and page-break placement.
pub trait DocumentRenderer {
    fn render(
        &self,
        blocks: &[LayoutBlock],
        stylesheet: &StyleSheet,
        geometry: &PageGeometry,
    ) -> Result<Vec<u8>, RenderError>;
}
