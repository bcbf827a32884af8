//! `cvpress schema`: export the CV data format description.

use std::path::PathBuf;

use clap::Args;

use crate::commands::write_output;
use crate::errors::AppError;
use crate::schema::export;

#[derive(Debug, Args)]
pub struct SchemaArgs {
    /// Output file path for the JSON Schema.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output file path for the Markdown documentation.
    #[arg(short, long)]
    pub markdown: Option<PathBuf>,
}

pub fn run(args: &SchemaArgs) -> Result<(), AppError> {
    if args.output.is_none() && args.markdown.is_none() {
        return Err(AppError::Usage(
            "Please specify at least one output option: --output or --markdown".to_string(),
        ));
    }

    if let Some(path) = &args.output {
        let json = export::json_schema_string().map_err(anyhow::Error::from)?;
        write_output(path, json.as_bytes())?;
        println!("JSON schema saved to: {}", path.display());
    }

    if let Some(path) = &args.markdown {
        write_output(path, export::markdown().as_bytes())?;
        println!("Markdown documentation saved to: {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_requires_an_output() {
        let args = SchemaArgs {
            output: None,
            markdown: None,
        };
        let err = run(&args).unwrap_err();
        assert!(matches!(err, AppError::Usage(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_schema_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let args = SchemaArgs {
            output: Some(dir.path().join("schema/cv.json")),
            markdown: Some(dir.path().join("docs/cv.md")),
        };
        run(&args).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.path().join("schema/cv.json")).unwrap())
                .unwrap();
        assert_eq!(json["title"], "CV");
        let md = std::fs::read_to_string(dir.path().join("docs/cv.md")).unwrap();
        assert!(md.starts_with("# CV Schema Documentation"));
    }
}
