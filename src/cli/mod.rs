//! CLI command handlers for LazyFolio.
//!
//! This module provides headless, scriptable access to LazyFolio's core functionality
//! for automation, testing, and CI/CD integration.

pub mod common;
pub mod export;
pub mod init;
pub mod skills;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::ExitCode;
pub use export::ExportArgs;
pub use init::InitArgs;
pub use skills::SkillsArgs;
pub use validate::ValidateArgs;
