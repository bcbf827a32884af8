//! Theme registry: named themes mapped to a complete set of text formats.
//!
//! Each theme is a plain function from semantic [`Role`] to [`FormatSpec`].
//! A [`StyleSheet`] is built by evaluating that function for every role up
//! front, so a sheet always has an entry for every role and is never mutated
//! after construction.

pub mod classic;
pub mod minimal;
pub mod modern;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ────────────────────────────────────────────────────────────────────────────
// Semantic roles
// ────────────────────────────────────────────────────────────────────────────

/// A named category of text purpose. Layout blocks carry a role; the active
/// stylesheet decides what it looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Name,
    SectionHeading,
    ContactInfo,
    ExperienceTitle,
    RoleTitle,
    ExperienceDetails,
    Body,
    BulletItem,
}

impl Role {
    pub const ALL: [Role; 8] = [
        Role::Name,
        Role::SectionHeading,
        Role::ContactInfo,
        Role::ExperienceTitle,
        Role::RoleTitle,
        Role::ExperienceDetails,
        Role::Body,
        Role::BulletItem,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Role::Name => "Name",
            Role::SectionHeading => "SectionHeading",
            Role::ContactInfo => "ContactInfo",
            Role::ExperienceTitle => "ExperienceTitle",
            Role::RoleTitle => "RoleTitle",
            Role::ExperienceDetails => "ExperienceDetails",
            Role::Body => "Body",
            Role::BulletItem => "BulletItem",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Format specification
// ────────────────────────────────────────────────────────────────────────────

/// Base font families available as PDF built-in fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    Helvetica,
    Times,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextTransform {
    None,
    Uppercase,
}

impl TextTransform {
    pub fn apply(self, text: &str) -> String {
        match self {
            TextTransform::None => text.to_string(),
            TextTransform::Uppercase => text.to_uppercase(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
    pub const DARK_BLUE: Rgb = Rgb::new(0x00, 0x00, 0x8B);
    pub const DARK_GREY: Rgb = Rgb::new(0xA9, 0xA9, 0xA9);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Components scaled to 0.0..=1.0.
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }
}

/// Visual format for one semantic role. Lengths are in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormatSpec {
    pub font: FontFamily,
    pub bold: bool,
    pub italic: bool,
    pub size: f32,
    /// Baseline-to-baseline distance.
    pub leading: f32,
    pub color: Rgb,
    pub background: Option<Rgb>,
    /// Inner padding of the background box.
    pub padding: f32,
    pub space_before: f32,
    pub space_after: f32,
    pub left_indent: f32,
    pub right_indent: f32,
    pub text_transform: TextTransform,
}

impl FormatSpec {
    /// Plain black text with leading at 1.2× size and no spacing.
    pub fn text(font: FontFamily, size: f32) -> Self {
        FormatSpec {
            font,
            bold: false,
            italic: false,
            size,
            leading: size * 1.2,
            color: Rgb::BLACK,
            background: None,
            padding: 0.0,
            space_before: 0.0,
            space_after: 0.0,
            left_indent: 0.0,
            right_indent: 0.0,
            text_transform: TextTransform::None,
        }
    }

    pub fn bold(self) -> Self {
        FormatSpec { bold: true, ..self }
    }

    pub fn italic(self) -> Self {
        FormatSpec { italic: true, ..self }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Themes and stylesheets
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StyleError {
    #[error("unknown theme '{requested}' (available: classic, modern, minimal)")]
    UnknownTheme { requested: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    Classic,
    Modern,
    Minimal,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Classic, Theme::Modern, Theme::Minimal];

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Classic => "classic",
            Theme::Modern => "modern",
            Theme::Minimal => "minimal",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Theme::Classic => "Traditional serif layout with Helvetica name line",
            Theme::Modern => "Helvetica throughout with dark blue accents and banded headings",
            Theme::Minimal => "Compact Helvetica with uppercase section headings",
        }
    }

    /// Builds the full stylesheet for this theme.
    pub fn stylesheet(self) -> StyleSheet {
        let format_for: fn(Role) -> FormatSpec = match self {
            Theme::Classic => classic::format_for,
            Theme::Modern => modern::format_for,
            Theme::Minimal => minimal::format_for,
        };
        StyleSheet {
            theme: self,
            formats: Role::ALL.map(format_for),
        }
    }
}

impl FromStr for Theme {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Theme::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| StyleError::UnknownTheme {
                requested: s.to_string(),
            })
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Complete role → format mapping for one theme.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    theme: Theme,
    formats: [FormatSpec; 8],
}

impl StyleSheet {
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn get(&self, role: Role) -> &FormatSpec {
        &self.formats[role.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, &FormatSpec)> + '_ {
        Role::ALL.into_iter().map(move |r| (r, self.get(r)))
    }
}

/// Resolves a theme name (case-insensitive) to its stylesheet.
pub fn resolve(name: &str) -> Result<StyleSheet, StyleError> {
    Ok(name.parse::<Theme>()?.stylesheet())
}

/// Like [`resolve`], but falls back to the classic theme with a warning.
pub fn resolve_or_default(name: &str) -> StyleSheet {
    match resolve(name) {
        Ok(sheet) => sheet,
        Err(e) => {
            tracing::warn!(theme = name, error = %e, "Falling back to classic theme");
            Theme::Classic.stylesheet()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_classic_has_every_role() {
        let sheet = resolve("classic").unwrap();
        assert_eq!(sheet.iter().count(), Role::ALL.len());
        for role in Role::ALL {
            assert!(sheet.get(role).size > 0.0, "{role} has no size");
        }
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(resolve("CLASSIC").unwrap(), resolve("classic").unwrap());
        assert_eq!(resolve("  Modern ").unwrap().theme(), Theme::Modern);
    }

    #[test]
    fn test_resolve_unknown_theme() {
        let err = resolve("fancy").unwrap_err();
        assert_eq!(
            err,
            StyleError::UnknownTheme {
                requested: "fancy".to_string()
            }
        );
    }

    #[test]
    fn test_resolve_or_default_falls_back_to_classic() {
        assert_eq!(resolve_or_default("fancy").theme(), Theme::Classic);
        assert_eq!(resolve_or_default("minimal").theme(), Theme::Minimal);
    }

    #[test]
    fn test_every_theme_defines_positive_leading() {
        for theme in Theme::ALL {
            let sheet = theme.stylesheet();
            for (role, spec) in sheet.iter() {
                assert!(spec.leading >= spec.size, "{theme}/{role} leading below size");
            }
        }
    }

    #[test]
    fn test_themes_differ() {
        let classic = Theme::Classic.stylesheet();
        let modern = Theme::Modern.stylesheet();
        assert_ne!(classic.get(Role::SectionHeading), modern.get(Role::SectionHeading));
    }

    #[test]
    fn test_text_transform_uppercase() {
        assert_eq!(TextTransform::Uppercase.apply("Work Experience"), "WORK EXPERIENCE");
        assert_eq!(TextTransform::None.apply("Skills"), "Skills");
    }

    #[test]
    fn test_rgb_to_unit() {
        assert_eq!(Rgb::WHITE.to_unit(), (1.0, 1.0, 1.0));
        assert_eq!(Rgb::BLACK.to_unit(), (0.0, 0.0, 0.0));
    }
}
