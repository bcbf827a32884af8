use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cvpress::commands::{
    self, generate::GenerateArgs, init::InitArgs, preview::PreviewArgs, schema::SchemaArgs,
    validate::ValidateArgs,
};
use cvpress::config::Config;
use cvpress::errors::{AppError, EXIT_INTERNAL};

/// Convert YAML CV files into formatted PDF documents.
#[derive(Debug, Parser)]
#[command(name = "cvpress", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a PDF CV from a YAML file.
    Generate(GenerateArgs),
    /// Validate a YAML file against the CV schema.
    Validate(ValidateArgs),
    /// Initialize a new CV YAML file from a template.
    Init(InitArgs),
    /// Export the CV schema as JSON Schema and/or Markdown.
    Schema(SchemaArgs),
    /// Open an existing PDF CV file.
    Preview(PreviewArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load configuration first; the log filter depends on it
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e:#}");
            return ExitCode::from(EXIT_INTERNAL);
        }
    };

    // Initialize structured logging on stderr; stdout carries command output
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("cvpress v{}", env!("CARGO_PKG_VERSION"));

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.report());
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(command: Command, config: &Config) -> Result<(), AppError> {
    match command {
        Command::Generate(args) => {
            let output = commands::generate::run(&args, config)?;
            info!(path = %output.display(), "Done");
        }
        Command::Validate(args) => {
            commands::validate::run(&args)?;
        }
        Command::Init(args) => {
            commands::init::run(&args)?;
        }
        Command::Schema(args) => commands::schema::run(&args)?,
        Command::Preview(args) => commands::preview::run(&args)?,
    }
    Ok(())
}
