//! `cvpress generate`: YAML in, PDF out.

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::info;

use crate::commands::write_output;
use crate::config::Config;
use crate::errors::AppError;
use crate::layout::compose;
use crate::models::Cv;
use crate::preview;
use crate::render::{DocumentRenderer, PageGeometry, PageSize, PdfRenderer};
use crate::source;
use crate::styles::{self, StyleSheet};
use crate::validation;

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Path to the YAML file containing CV data.
    pub input: PathBuf,

    /// Output PDF file path. Defaults to the input name with a .pdf extension.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Theme: classic, modern or minimal.
    #[arg(short, long)]
    pub style: Option<String>,

    /// Page size: A4 or letter.
    #[arg(short, long)]
    pub page_size: Option<String>,

    /// Fail on an unknown style instead of falling back to classic.
    #[arg(long)]
    pub strict_style: bool,

    /// Open the PDF after generation.
    #[arg(long)]
    pub preview: bool,
}

pub fn run(args: &GenerateArgs, config: &Config) -> Result<PathBuf, AppError> {
    let value = source::read_file(&args.input)?;
    let cv = validation::validate(&value)?;

    let theme = args.style.as_deref().unwrap_or(&config.theme);
    let stylesheet = if args.strict_style {
        styles::resolve(theme)?
    } else {
        styles::resolve_or_default(theme)
    };
    let page_size = PageSize::from_name(args.page_size.as_deref().unwrap_or(&config.page_size));

    let bytes = build_pdf(&cv, &stylesheet, page_size)?;
    let output = output_path(&args.input, args.output.as_deref(), config.output_dir.as_deref());
    write_output(&output, &bytes)?;

    info!(path = %output.display(), theme = %stylesheet.theme(), ?page_size, "Generated CV");
    println!("Successfully generated PDF CV: {}", output.display());

    if args.preview {
        preview::open(&output);
    }
    Ok(output)
}

/// Composes and renders a validated CV.
pub fn build_pdf(cv: &Cv, stylesheet: &StyleSheet, page_size: PageSize) -> Result<Vec<u8>, AppError> {
    let blocks = compose(cv, stylesheet);
    let renderer = PdfRenderer::new(cv.personal_info.name.clone());
    Ok(renderer.render(&blocks, stylesheet, &PageGeometry::new(page_size))?)
}

/// Explicit output wins; otherwise the input file name with `.pdf`, placed in
/// `output_dir` when configured or next to the input.
pub fn output_path(input: &Path, explicit: Option<&Path>, output_dir: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    let with_pdf = input.with_extension("pdf");
    match (output_dir, with_pdf.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => with_pdf,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = "personal_info:\n  name: Jane Doe\n  email: jane@x.com\neducation: []\nexperience: []\n";

    fn make_args(input: PathBuf, output: Option<PathBuf>) -> GenerateArgs {
        GenerateArgs {
            input,
            output,
            style: None,
            page_size: None,
            strict_style: false,
            preview: false,
        }
    }

    fn make_config() -> Config {
        Config {
            theme: "classic".to_string(),
            page_size: "A4".to_string(),
            output_dir: None,
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn test_output_path_defaults_next_to_input() {
        assert_eq!(
            output_path(Path::new("cvs/jane.yaml"), None, None),
            PathBuf::from("cvs/jane.pdf")
        );
    }

    #[test]
    fn test_output_path_uses_output_dir() {
        assert_eq!(
            output_path(Path::new("cvs/jane.yaml"), None, Some(Path::new("/out"))),
            PathBuf::from("/out/jane.pdf")
        );
    }

    #[test]
    fn test_output_path_explicit_wins() {
        assert_eq!(
            output_path(
                Path::new("jane.yaml"),
                Some(Path::new("x/cv.pdf")),
                Some(Path::new("/out"))
            ),
            PathBuf::from("x/cv.pdf")
        );
    }

    #[test]
    fn test_generate_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("jane.yaml");
        std::fs::write(&input, MINIMAL).unwrap();

        let output = run(&make_args(input, None), &make_config()).unwrap();
        assert_eq!(output, dir.path().join("jane.pdf"));
        let bytes = std::fs::read(&output).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_generate_unknown_style_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("jane.yaml");
        std::fs::write(&input, MINIMAL).unwrap();
        let mut args = make_args(input, Some(dir.path().join("out/cv.pdf")));
        args.style = Some("fancy".to_string());
        args.page_size = Some("tabloid".to_string());

        let output = run(&args, &make_config()).unwrap();
        assert!(output.exists());
    }

    #[test]
    fn test_generate_strict_style_rejects_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("jane.yaml");
        std::fs::write(&input, MINIMAL).unwrap();
        let mut args = make_args(input, None);
        args.style = Some("fancy".to_string());
        args.strict_style = true;

        let err = run(&args, &make_config()).unwrap_err();
        assert!(matches!(err, AppError::UnknownTheme { .. }));
    }

    #[test]
    fn test_generate_invalid_cv_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bad.yaml");
        std::fs::write(&input, "personal_info: {name: Jane}\neducation: []\n").unwrap();

        let err = run(&make_args(input, None), &make_config()).unwrap_err();
        match err {
            AppError::Validation(errors) => {
                assert_eq!(errors.paths(), vec!["personal_info.email", "experience"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!dir.path().join("bad.pdf").exists());
    }

    #[test]
    fn test_generate_malformed_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.yaml");
        std::fs::write(&input, "personal_info: [oops\n").unwrap();

        let err = run(&make_args(input, None), &make_config()).unwrap_err();
        assert!(matches!(err, AppError::MalformedSource { .. }));
    }

    #[test]
    fn test_bundled_templates_render_in_every_theme() {
        for template in crate::templates::Template::ALL {
            let cv = validation::validate_str(template.content()).unwrap();
            for theme in styles::Theme::ALL {
                let bytes = build_pdf(&cv, &theme.stylesheet(), PageSize::Letter).unwrap();
                assert!(bytes.starts_with(b"%PDF"));
            }
        }
    }
}
