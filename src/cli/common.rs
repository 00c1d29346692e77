//! Shared CLI error types and exit-code mapping.

use serde::Serialize;
use std::fmt;

/// Result type for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// Process exit codes used by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully
    Success = 0,
    /// Content failed validation (or warnings in strict mode)
    ValidationError = 1,
    /// File system or serialization problem
    IoError = 2,
}

impl ExitCode {
    /// The numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error raised by CLI command execution.
#[derive(Debug)]
pub struct CliError {
    kind: ExitCode,
    message: String,
}

impl CliError {
    /// An I/O or serialization failure (exit code 2).
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// A validation failure (exit code 1).
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// The exit code this error maps to.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        self.kind
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// JSON payload for `validate --json`.
#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    /// True when no errors were found
    pub valid: bool,
    /// Every finding, errors first
    pub errors: Vec<ValidationMessage>,
    /// Per-area status summary
    pub checks: ValidationChecks,
}

/// One finding in a validation response.
#[derive(Debug, Serialize)]
pub struct ValidationMessage {
    /// "error" or "warning"
    pub severity: String,
    /// Content area the finding belongs to
    pub area: String,
    /// Human-readable description
    pub message: String,
}

/// Per-area status strings: "passed", "warning", or "failed".
#[derive(Debug, Serialize)]
pub struct ValidationChecks {
    /// Name, title, summary length
    pub profile: String,
    /// Email and link URLs
    pub contact: String,
    /// Skill list shape
    pub skills: String,
    /// Experience entries
    pub experience: String,
}

impl ValidationChecks {
    /// All checks passing.
    #[must_use]
    pub fn all_passed() -> Self {
        Self {
            profile: "passed".to_string(),
            contact: "passed".to_string(),
            skills: "passed".to_string(),
            experience: "passed".to_string(),
        }
    }

    /// Downgrades one area's status. "failed" wins over "warning".
    pub fn mark(&mut self, area: &str, severity: &str) {
        let status = match area {
            "profile" => &mut self.profile,
            "contact" => &mut self.contact,
            "skills" => &mut self.skills,
            "experience" => &mut self.experience,
            _ => return,
        };

        if severity == "error" {
            *status = "failed".to_string();
        } else if status == "passed" {
            *status = "warning".to_string();
        }
    }
}
