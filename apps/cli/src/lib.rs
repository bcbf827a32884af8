//! cvpress: YAML CV data to paginated PDF.
//!
//! Pipeline: [`source`] parses YAML into a generic tree, [`validation`] builds
//! the [`models::Cv`] graph, [`styles`] resolves a theme, [`layout`] composes
//! and flows blocks, and [`render`] writes the PDF.

pub mod commands;
pub mod config;
pub mod errors;
pub mod layout;
pub mod models;
pub mod preview;
pub mod render;
pub mod schema;
pub mod source;
pub mod styles;
pub mod templates;
pub mod validation;
