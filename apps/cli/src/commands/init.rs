//! `cvpress init`: write a starter YAML file.

use std::path::PathBuf;

use clap::Args;

use crate::errors::AppError;
use crate::styles::Theme;
use crate::templates::{self, Template};

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Path where the YAML file will be saved.
    pub output: PathBuf,

    /// Template to use: default, academic or minimal.
    #[arg(short, long, default_value = "default")]
    pub template: String,
}

pub fn run(args: &InitArgs) -> Result<Template, AppError> {
    let template = templates::create_from_template(&args.template, &args.output)?;
    println!("{}", usage_text(&args.output));
    Ok(template)
}

fn usage_text(output: &std::path::Path) -> String {
    let mut out = format!("Successfully created CV YAML file: {}\n", output.display());
    out.push_str("Edit the file with your information, then use 'cvpress generate' to create a PDF.\n");

    out.push_str("\nAvailable templates for CV initialization:\n");
    for t in Template::ALL {
        out.push_str(&format!("  - {}: {}\n", t.name(), t.description()));
    }

    out.push_str("\nAvailable styles for PDF generation:\n");
    for theme in Theme::ALL {
        out.push_str(&format!("  - {}: {}\n", theme.name(), theme.description()));
    }

    let shown = output.display();
    out.push_str("\nExample usage:\n");
    out.push_str("  cvpress init my-cv.yaml --template academic\n");
    out.push_str(&format!("  cvpress generate {shown} --style modern --page-size A4\n"));
    out.push_str(&format!("  cvpress generate {shown} --preview\n"));
    out.push_str(&format!("  cvpress preview {}", output.with_extension("pdf").display()));
    out
}
