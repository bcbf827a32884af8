//! Built-in starter CV files for `cvpress init`.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("invalid template name: {requested}. Valid templates are: default, academic, minimal")]
    Unknown { requested: String },

    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Default,
    Academic,
    Minimal,
}

impl Template {
    pub const ALL: [Template; 3] = [Template::Default, Template::Academic, Template::Minimal];

    pub fn name(&self) -> &'static str {
        match self {
            Template::Default => "default",
            Template::Academic => "academic",
            Template::Minimal => "minimal",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Template::Default => "Standard professional CV for software engineers and other tech roles",
            Template::Academic => "Academic CV with focus on publications, teaching experience, and research",
            Template::Minimal => "Simplified CV format with essential sections only",
        }
    }

    /// Raw YAML content.
    pub fn content(&self) -> &'static str {
        match self {
            Template::Default => include_str!("../../templates/default.yaml"),
            Template::Academic => include_str!("../../templates/academic.yaml"),
            Template::Minimal => include_str!("../../templates/minimal.yaml"),
        }
    }
}

impl FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| TemplateError::Unknown {
                requested: s.to_string(),
            })
    }
}

/// Writes the named template to `output`, creating parent directories.
pub fn create_from_template(name: &str, output: &Path) -> Result<Template, TemplateError> {
    let template: Template = name.parse()?;
    let write_err = |source| TemplateError::Write {
        path: output.to_path_buf(),
        source,
    };
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(output, template.content()).map_err(write_err)?;
    tracing::info!(template = template.name(), path = %output.display(), "Wrote CV template");
    Ok(template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_str;

    #[test]
    fn test_every_template_validates() {
        for template in Template::ALL {
            let result = validate_str(template.content());
            assert!(result.is_ok(), "{} template invalid: {:?}", template.name(), result.err());
        }
    }

    #[test]
    fn test_unknown_template_lists_valid_names() {
        let err = "fancy".parse::<Template>().unwrap_err();
        assert!(err.to_string().contains("default, academic, minimal"));
    }

    #[test]
    fn test_template_names_are_case_sensitive() {
        assert!("Default".parse::<Template>().is_err());
        assert_eq!("academic".parse::<Template>().unwrap(), Template::Academic);
    }

    #[test]
    fn test_create_from_template_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("nested/my-cv.yaml");
        let template = create_from_template("minimal", &output).unwrap();
        assert_eq!(template, Template::Minimal);
        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written, Template::Minimal.content());
    }
}
