//! Validation command for portfolio content files.

use crate::cli::common::{
    CliError, CliResult, ValidationChecks, ValidationMessage, ValidationResponse,
};
use crate::content;
use clap::Args;
use std::path::PathBuf;

/// Validate a content file for errors and warnings
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to portfolio content TOML file
    #[arg(short, long, value_name = "FILE")]
    pub content: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let portfolio = content::load_file(&self.content)
            .map_err(|e| CliError::io(format!("Failed to load content: {e}")))?;

        let report = portfolio.validate();

        let mut checks = ValidationChecks::all_passed();
        let mut messages = Vec::new();

        for issue in &report.errors {
            checks.mark(&issue.area, "error");
            messages.push(ValidationMessage {
                severity: "error".to_string(),
                area: issue.area.clone(),
                message: issue.message.clone(),
            });
        }

        for issue in &report.warnings {
            checks.mark(&issue.area, "warning");
            messages.push(ValidationMessage {
                severity: "warning".to_string(),
                area: issue.area.clone(),
                message: issue.message.clone(),
            });
        }

        let response = ValidationResponse {
            valid: report.is_valid(),
            errors: messages,
            checks,
        };

        // Output results
        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            // Human-readable output
            if response.valid {
                println!("✓ Validation passed");
            } else {
                println!("✗ Validation failed");
            }

            println!("\nChecks:");
            println!("  Profile:    {}", response.checks.profile);
            println!("  Contact:    {}", response.checks.contact);
            println!("  Skills:     {}", response.checks.skills);
            println!("  Experience: {}", response.checks.experience);

            if !response.errors.is_empty() {
                println!("\nIssues:");
                for msg in &response.errors {
                    let prefix = if msg.severity == "error" {
                        "  ✗"
                    } else {
                        "  ⚠"
                    };
                    println!("{} [{}] {}", prefix, msg.area, msg.message);
                }
            }
        }

        // Exit code
        if !response.valid {
            return Err(CliError::validation("Validation failed"));
        }

        if self.strict {
            let has_warnings = response.errors.iter().any(|m| m.severity == "warning");
            if has_warnings {
                return Err(CliError::validation("Warnings found in strict mode"));
            }
        }

        Ok(())
    }
}
