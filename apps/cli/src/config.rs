use std::env::VarError;
use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_THEME: &str = "classic";
const DEFAULT_PAGE_SIZE: &str = "A4";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Defaults loaded from environment variables (and `.env` if present).
/// Command-line flags take precedence over every field.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// `CVPRESS_THEME`
    pub theme: String,
    /// `CVPRESS_PAGE_SIZE`
    pub page_size: String,
    /// `CVPRESS_OUTPUT_DIR`: where PDFs go when `--output` is not given.
    pub output_dir: Option<PathBuf>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(optional_env)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Result<Option<String>>) -> Result<Self> {
        Ok(Config {
            theme: lookup("CVPRESS_THEME")?.unwrap_or_else(|| DEFAULT_THEME.to_string()),
            page_size: lookup("CVPRESS_PAGE_SIZE")?.unwrap_or_else(|| DEFAULT_PAGE_SIZE.to_string()),
            output_dir: lookup("CVPRESS_OUTPUT_DIR")?
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
            rust_log: lookup("RUST_LOG")?.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }
}

fn optional_env(key: &str) -> Result<Option<String>> {
    match std::env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Environment variable '{key}' is not valid UTF-8")),
    }
}
