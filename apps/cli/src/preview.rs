//! Opens a generated file in the platform's default viewer.

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

/// Viewer command for the current OS.
fn viewer_command(path: &Path) -> Command {
    if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(path);
        cmd
    } else if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}

fn run(path: &Path) -> io::Result<ExitStatus> {
    let path = std::fs::canonicalize(path)?;
    viewer_command(&path).status()
}

/// Opens `path` in the default viewer. Failures are logged, never returned.
pub fn open(path: &Path) -> bool {
    match run(path) {
        Ok(status) if status.success() => {
            tracing::info!(path = %path.display(), "Opened PDF file");
            true
        }
        Ok(status) => {
            tracing::warn!(path = %path.display(), %status, "Could not open PDF file");
            false
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Could not open PDF file");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_file_is_not_fatal() {
        assert!(!open(Path::new("/definitely/not/here.pdf")));
    }

    #[test]
    fn test_viewer_command_targets_path() {
        let cmd = viewer_command(Path::new("/tmp/cv.pdf"));
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args.last().map(|a| a.to_str()), Some(Some("/tmp/cv.pdf")));
    }
}
