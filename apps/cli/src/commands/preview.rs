//! `cvpress preview`: open an existing PDF.

use std::path::PathBuf;

use clap::Args;

use crate::errors::AppError;
use crate::preview;

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Path to the PDF file to preview.
    pub pdf: PathBuf,
}

pub fn run(args: &PreviewArgs) -> Result<(), AppError> {
    if !args.pdf.is_file() {
        return Err(AppError::io(
            &args.pdf,
            std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        ));
    }
    if preview::open(&args.pdf) {
        println!("Opened PDF file: {}", args.pdf.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_missing_file() {
        let args = PreviewArgs {
            pdf: PathBuf::from("/definitely/not/here.pdf"),
        };
        assert!(matches!(run(&args).unwrap_err(), AppError::Io { .. }));
    }
}
