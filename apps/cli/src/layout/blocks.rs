//! The block sequence handed from the composer to the renderer.

use serde::Serialize;

use crate::styles::Role;

/// One unit of styled, orderable content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LayoutBlock {
    Heading { text: String, role: Role },
    Paragraph { text: String, role: Role },
    BulletList { items: Vec<String>, role: Role },
    /// Vertical gap in points.
    Spacer(f32),
}

impl LayoutBlock {
    pub fn heading(text: impl Into<String>, role: Role) -> Self {
        LayoutBlock::Heading {
            text: text.into(),
            role,
        }
    }

    pub fn paragraph(text: impl Into<String>, role: Role) -> Self {
        LayoutBlock::Paragraph {
            text: text.into(),
            role,
        }
    }

    pub fn bullets(items: Vec<String>, role: Role) -> Self {
        LayoutBlock::BulletList { items, role }
    }

    /// Role tag, or `None` for spacers.
    #[cfg(test)]
    pub(crate) fn role(&self) -> Option<Role> {
        match self {
            LayoutBlock::Heading { role, .. }
            | LayoutBlock::Paragraph { role, .. }
            | LayoutBlock::BulletList { role, .. } => Some(*role),
            LayoutBlock::Spacer(_) => None,
        }
    }

    /// Text of a heading or paragraph; `None` for other blocks.
    #[cfg(test)]
    pub(crate) fn text(&self) -> Option<&str> {
        match self {
            LayoutBlock::Heading { text, .. } | LayoutBlock::Paragraph { text, .. } => Some(text),
            LayoutBlock::BulletList { .. } | LayoutBlock::Spacer(_) => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn is_heading(&self, text: &str) -> bool {
        matches!(self, LayoutBlock::Heading { text: t, .. } if t == text)
    }
}
