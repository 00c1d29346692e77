//! Export command for generating resume documents.

use crate::cli::common::{CliError, CliResult};
use crate::content;
use crate::export::{self, ExportFormat};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Render the portfolio to Markdown or plain text
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Path to portfolio content TOML file (defaults to the embedded content)
    #[arg(short, long, value_name = "FILE")]
    pub content: Option<PathBuf>,

    /// Output format: markdown or text
    #[arg(short, long, value_name = "FORMAT", default_value = "markdown")]
    pub format: String,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let format = ExportFormat::from_key(&self.format).ok_or_else(|| {
            CliError::validation(format!(
                "Unknown format '{}'. Expected 'markdown' or 'text'",
                self.format
            ))
        })?;

        let portfolio = content::resolve(self.content.as_deref(), None)
            .map_err(|e| CliError::io(format!("Failed to load content: {e}")))?;

        let document = export::render(&portfolio, format);

        match &self.output {
            Some(path) => {
                fs::write(path, &document)
                    .map_err(|e| CliError::io(format!("Failed to write {}: {e}", path.display())))?;
                println!("✓ Exported {} to {}", format.key(), path.display());
            }
            None => print!("{document}"),
        }

        Ok(())
    }
}
