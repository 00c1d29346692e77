//! Content loading and the embedded starter portfolio.
//!
//! Content is a plain TOML asset deserialized once at startup; the
//! rest of the application treats the resulting [`Portfolio`] as an
//! immutable table. A starter portfolio is compiled into the binary
//! so the viewer works with no arguments at all.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::Portfolio;

/// The starter content compiled into the binary.
pub const DEFAULT_CONTENT: &str = include_str!("data/portfolio.toml");

/// Parses portfolio content from a TOML string.
pub fn parse(raw: &str) -> Result<Portfolio> {
    let portfolio = toml::from_str(raw).context("Invalid portfolio TOML")?;
    Ok(portfolio)
}

/// Loads portfolio content from a TOML file.
pub fn load_file(path: &Path) -> Result<Portfolio> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read content file: {}", path.display()))?;
    parse(&raw).with_context(|| format!("Failed to parse content file: {}", path.display()))
}

/// Returns the embedded starter portfolio.
pub fn embedded() -> Result<Portfolio> {
    parse(DEFAULT_CONTENT)
}

/// Resolves which content to load.
///
/// An explicit path wins, then the path configured under
/// `paths.content`, then the embedded starter. A path that is present
/// but unreadable is an error, not a silent fallback.
pub fn resolve(explicit: Option<&Path>, configured: Option<&Path>) -> Result<Portfolio> {
    if let Some(path) = explicit {
        return load_file(path);
    }
    if let Some(path) = configured {
        return load_file(path)
            .with_context(|| format!("Configured content file failed to load: {}", path.display()));
    }
    embedded()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SkillGroup;
    use std::io::Write;

    #[test]
    fn test_embedded_parses_clean() {
        let portfolio = embedded().unwrap();
        let report = portfolio.validate();
        assert!(report.is_valid(), "embedded errors: {:?}", report.errors);
        assert!(
            report.warnings.is_empty(),
            "embedded warnings: {:?}",
            report.warnings
        );
    }

    #[test]
    fn test_embedded_has_one_api_skill() {
        let portfolio = embedded().unwrap();
        let api: Vec<_> = portfolio
            .skills
            .iter()
            .filter(|skill| skill.group == SkillGroup::Api)
            .collect();
        assert_eq!(api.len(), 1);
        assert_eq!(api[0].label, "API Testing (Swagger)");
    }

    #[test]
    fn test_load_file_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("portfolio.toml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(DEFAULT_CONTENT.as_bytes()).unwrap();

        let portfolio = load_file(&path).unwrap();
        assert_eq!(portfolio.profile.name, "Mari Zakadze");
        assert_eq!(portfolio.skills.len(), 10);
        assert_eq!(portfolio.experience.len(), 4);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse("this is not toml [[").is_err());
    }

    #[test]
    fn test_resolve_missing_explicit_path_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(resolve(Some(&missing), None).is_err());
    }

    #[test]
    fn test_resolve_prefers_explicit_over_configured() {
        let dir = tempfile::TempDir::new().unwrap();
        let explicit = dir.path().join("explicit.toml");
        let configured = dir.path().join("configured.toml");

        let mut custom = embedded().unwrap();
        custom.profile.name = "Explicit Person".to_string();
        fs::write(&explicit, toml::to_string(&custom).unwrap()).unwrap();
        fs::write(&configured, DEFAULT_CONTENT).unwrap();

        let portfolio = resolve(Some(&explicit), Some(&configured)).unwrap();
        assert_eq!(portfolio.profile.name, "Explicit Person");
    }

    #[test]
    fn test_resolve_falls_back_to_embedded() {
        let portfolio = resolve(None, None).unwrap();
        assert_eq!(portfolio.profile.name, "Mari Zakadze");
    }
}
