//! End-to-end tests for `lazyfolio export` command.

use std::fs;
use std::process::Command;

mod fixtures;
use fixtures::*;

/// Path to the lazyfolio binary
fn lazyfolio_bin() -> &'static str {
    env!("CARGO_BIN_EXE_lazyfolio")
}

#[test]
fn test_export_markdown_to_stdout() {
    let output = Command::new(lazyfolio_bin())
        .args(["export"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Export should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("# Mari Zakadze"), "got: {stdout}");
    assert!(stdout.contains("## About"));
    assert!(stdout.contains("## Skills"));
    assert!(stdout.contains("## Experience"));
    assert!(stdout.contains("## Contact"));
    assert!(stdout.contains("- **Email:** mariazakaidze@gmail.com"));
}

#[test]
fn test_export_text_to_stdout() {
    let output = Command::new(lazyfolio_bin())
        .args(["export", "--format", "text"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.starts_with("MARI ZAKADZE"),
        "Plain text uppercases the name, got: {stdout}"
    );
    assert!(stdout.contains("SKILLS\n------\n"), "Headings are underlined");
    assert!(
        !stdout.contains("##"),
        "Plain text must not contain Markdown headings"
    );
}

#[test]
fn test_export_writes_output_file() {
    let (content_path, temp_dir) = write_temp_content(&valid_content());
    let out_path = temp_dir.path().join("resume.md");

    let output = Command::new(lazyfolio_bin())
        .args([
            "export",
            "--content",
            content_path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Export should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ Exported markdown"), "got: {stdout}");

    assert!(
        out_path.exists(),
        "Export file should exist at: {}",
        out_path.display()
    );
    let document = fs::read_to_string(&out_path).expect("Failed to read export file");
    assert!(document.starts_with("# Alex Ash"));
    assert!(document.contains("- [QA] Exploratory Testing"));
    assert!(document.contains("### Senior QA Engineer — Example Corp"));
}

#[test]
fn test_export_format_aliases() {
    for alias in ["md", "markdown"] {
        let output = Command::new(lazyfolio_bin())
            .args(["export", "--format", alias])
            .output()
            .expect("Failed to execute command");
        assert_eq!(output.status.code(), Some(0), "alias '{alias}' should work");
    }

    for alias in ["txt", "plain"] {
        let output = Command::new(lazyfolio_bin())
            .args(["export", "--format", alias])
            .output()
            .expect("Failed to execute command");
        assert_eq!(output.status.code(), Some(0), "alias '{alias}' should work");
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.starts_with("MARI ZAKADZE"));
    }
}

#[test]
fn test_export_unknown_format() {
    let output = Command::new(lazyfolio_bin())
        .args(["export", "--format", "pdf"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(1),
        "Unknown format should exit with code 1"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown format 'pdf'"), "got: {stderr}");
}

#[test]
fn test_export_nonexistent_content_file() {
    let output = Command::new(lazyfolio_bin())
        .args(["export", "--content", "/nonexistent/portfolio.toml"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(2),
        "Missing content file should exit with code 2"
    );
}

#[test]
fn test_export_footer_present_in_both_formats() {
    for format in ["markdown", "text"] {
        let output = Command::new(lazyfolio_bin())
            .args(["export", "--format", format])
            .output()
            .expect("Failed to execute command");

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(
            stdout.contains("© "),
            "{format} export should end with the copyright footer"
        );
    }
}
