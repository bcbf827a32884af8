//! One module per `cvpress` subcommand. Each exposes a clap `Args` struct and
//! a `run` function returning `AppError` on failure.

pub mod generate;
pub mod init;
pub mod preview;
pub mod schema;
pub mod validate;

use std::path::Path;

use crate::errors::AppError;

/// Writes `bytes` to `path`, creating parent directories first.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
    }
    std::fs::write(path, bytes).map_err(|e| AppError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_output_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/out.txt");
        write_output(&path, b"hello").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"hello");
    }
}
