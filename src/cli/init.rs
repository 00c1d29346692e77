//! Init command writing a starter content file.

use crate::cli::common::{CliError, CliResult};
use crate::constants::APP_BINARY_NAME;
use crate::content;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Write a starter portfolio content file to edit
#[derive(Debug, Clone, Args)]
pub struct InitArgs {
    /// Where to write the starter file
    #[arg(short, long, value_name = "FILE", default_value = "portfolio.toml")]
    pub output: PathBuf,

    /// Overwrite the file if it already exists
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> CliResult<()> {
        if self.output.exists() && !self.force {
            return Err(CliError::validation(format!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            )));
        }

        fs::write(&self.output, content::DEFAULT_CONTENT).map_err(|e| {
            CliError::io(format!("Failed to write {}: {e}", self.output.display()))
        })?;

        println!("✓ Wrote starter content to {}", self.output.display());
        println!("  Edit it, then run: {APP_BINARY_NAME} {}", self.output.display());

        Ok(())
    }
}
