//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A small portfolio that validates with no errors and no warnings.
pub fn valid_content() -> String {
    r#"
[profile]
name = "Alex Ash"
title = "QA Engineer"
availability = "Open to work"
tagline = "Shipping without surprises."
intro = "Hands-on tester for web and mobile."
summary = "Five years of breaking builds before users can."
focus = "Quality"
strength = "Detail"
chips = ["Manual Testing", "Accessibility"]
updated = "2026-03-01"

[links]
email = "alex@example.com"
linkedin = "https://www.linkedin.com/in/alex-ash"
note = "Email works best."

[[skills]]
label = "Exploratory Testing"
group = "qa"

[[skills]]
label = "Accessibility Audits"
group = "a11y"

[[skills]]
label = "API Contract Checks"
group = "api"

[[experience]]
title = "Senior QA Engineer"
company = "Example Corp"
period = "Jan 2022 – Present"
bullets = ["Owned the regression suite.", "Cut release defects in half."]
"#
    .to_string()
}

/// Content with fatal problems: an empty profile name and a broken
/// email address.
pub fn invalid_content() -> String {
    valid_content()
        .replace("name = \"Alex Ash\"", "name = \"\"")
        .replace("email = \"alex@example.com\"", "email = \"not-an-email\"")
}

/// Content that is valid but carries a warning (duplicate skill label).
pub fn warning_content() -> String {
    let mut content = valid_content();
    content.push_str(
        "\n[[skills]]\nlabel = \"Exploratory Testing\"\ngroup = \"qa\"\n",
    );
    content
}

/// Bytes that are not a portfolio document at all.
pub fn garbage_content() -> String {
    "not even = [ toml".to_string()
}

/// Writes content to a file in a fresh temp directory.
///
/// Returns the file path together with the `TempDir` guard that keeps
/// it alive.
pub fn write_temp_content(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("portfolio.toml");
    fs::write(&path, content).expect("Failed to write content file");
    (path, temp_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_files_round_trip() {
        let (path, _guard) = write_temp_content(&valid_content());
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("Alex Ash"));
    }

    #[test]
    fn test_fixture_variants_differ() {
        assert_ne!(valid_content(), invalid_content());
        assert!(warning_content().len() > valid_content().len());
    }
}
