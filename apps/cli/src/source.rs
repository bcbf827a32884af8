//! Loading CV documents from YAML text or files into a generic tree.

use std::path::{Path, PathBuf};

use serde_yaml::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Not well-formed YAML. Line and column are 1-based when known.
    #[error("malformed YAML in {origin}{}: {message}", position(.line, .column))]
    Malformed {
        origin: String,
        line: Option<usize>,
        column: Option<usize>,
        message: String,
    },
}

fn position(line: &Option<usize>, column: &Option<usize>) -> String {
    match (line, column) {
        (Some(l), Some(c)) => format!(" at line {l}, column {c}"),
        (Some(l), None) => format!(" at line {l}"),
        _ => String::new(),
    }
}

impl SourceError {
    fn malformed(origin: &str, err: serde_yaml::Error) -> Self {
        let location = err.location();
        SourceError::Malformed {
            origin: origin.to_string(),
            line: location.as_ref().map(|l| l.line()),
            column: location.as_ref().map(|l| l.column()),
            message: err.to_string(),
        }
    }
}

/// Parses YAML text. An empty document parses to `Value::Null`.
pub fn parse_str(text: &str) -> Result<Value, SourceError> {
    serde_yaml::from_str(text).map_err(|e| SourceError::malformed("<string>", e))
}

/// Reads and parses a YAML file.
pub fn read_file(path: &Path) -> Result<Value, SourceError> {
    let text = std::fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "Read CV source");
    serde_yaml::from_str(&text).map_err(|e| SourceError::malformed(&path.display().to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_str_mapping() {
        let value = parse_str("personal_info:\n  name: Jane\n").unwrap();
        assert_eq!(value["personal_info"]["name"].as_str(), Some("Jane"));
    }

    #[test]
    fn test_parse_str_malformed_has_location() {
        let err = parse_str("a: b\nc: [unclosed\n").unwrap_err();
        match err {
            SourceError::Malformed { origin, line, .. } => {
                assert_eq!(origin, "<string>");
                assert!(line.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_read_file_missing() {
        let err = read_file(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, SourceError::Read { .. }));
        assert!(err.to_string().contains("/definitely/not/here.yaml"));
    }

    #[test]
    fn test_read_file_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "education: []").unwrap();
        let value = read_file(file.path()).unwrap();
        assert!(value["education"].as_sequence().unwrap().is_empty());
    }
}
