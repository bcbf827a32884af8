//! `cvpress validate`: structural check without rendering.

use std::path::PathBuf;

use clap::Args;

use crate::errors::AppError;
use crate::source;
use crate::validation::{self, ValidationErrors};

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the YAML file to validate.
    pub input: PathBuf,
}

pub fn run(args: &ValidateArgs) -> Result<(), AppError> {
    let value = source::read_file(&args.input)?;
    let (valid, errors) = validation::check(&value);
    if !valid {
        return Err(ValidationErrors(errors).into());
    }
    tracing::debug!(path = %args.input.display(), "CV file is valid");
    println!("Valid CV file - your CV data structure is correct.");
    Ok(())
}
