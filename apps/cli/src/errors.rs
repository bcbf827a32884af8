use std::path::PathBuf;

use thiserror::Error;

use crate::render::RenderError;
use crate::source::SourceError;
use crate::styles::StyleError;
use crate::templates::TemplateError;
use crate::validation::ValidationErrors;

/// Exit code for failures that indicate a bug rather than bad input
/// (`EX_SOFTWARE` from sysexits.h).
pub const EXIT_INTERNAL: u8 = 70;

/// Application-level error type.
/// `exit_code` and `report` turn it into the process outcome.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Unknown theme '{requested}'")]
    UnknownTheme { requested: String },

    #[error("Malformed YAML in {path}: {message}")]
    MalformedSource {
        path: String,
        line: Option<usize>,
        column: Option<usize>,
        message: String,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("{0}")]
    Usage(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<StyleError> for AppError {
    fn from(e: StyleError) -> Self {
        match e {
            StyleError::UnknownTheme { requested } => AppError::UnknownTheme { requested },
        }
    }
}

impl From<SourceError> for AppError {
    fn from(e: SourceError) -> Self {
        match e {
            SourceError::Read { path, source } => AppError::Io { path, source },
            SourceError::Malformed {
                origin,
                line,
                column,
                message,
            } => AppError::MalformedSource {
                path: origin,
                line,
                column,
                message,
            },
        }
    }
}

impl AppError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Validation(_)
            | AppError::UnknownTheme { .. }
            | AppError::MalformedSource { .. }
            | AppError::Io { .. }
            | AppError::Template(_) => 1,
            AppError::Usage(_) => 2,
            AppError::Render(_) | AppError::Internal(_) => EXIT_INTERNAL,
        }
    }

    /// Logs failures that are not the user's fault and returns the message to
    /// show on stderr.
    pub fn report(&self) -> String {
        match self {
            AppError::Validation(errors) => {
                let mut msg = String::from("Invalid CV file - the following errors were found:");
                for err in errors.errors() {
                    msg.push_str(&format!("\n  - {err}"));
                }
                msg
            }
            AppError::UnknownTheme { requested } => format!(
                "Error: unknown style '{requested}'. Available styles: classic, modern, minimal"
            ),
            AppError::MalformedSource {
                path,
                line,
                column,
                message,
            } => match (line, column) {
                (Some(l), Some(c)) => format!("Error: {path}:{l}:{c}: {message}"),
                _ => format!("Error: {path}: {message}"),
            },
            AppError::Io { path, source } => format!("Error: {}: {source}", path.display()),
            AppError::Template(e) => format!("Error: {e}"),
            AppError::Usage(msg) => msg.clone(),
            AppError::Render(e) => {
                tracing::error!("Render error: {e}");
                "An error occurred while generating the PDF".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                format!("An unexpected error occurred: {e}")
            }
        }
    }
}
