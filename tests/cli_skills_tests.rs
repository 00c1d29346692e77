//! End-to-end tests for `lazyfolio skills` command.

use std::process::Command;

mod fixtures;
use fixtures::*;

/// Path to the lazyfolio binary
fn lazyfolio_bin() -> &'static str {
    env!("CARGO_BIN_EXE_lazyfolio")
}

#[test]
fn test_skills_lists_embedded_content() {
    let output = Command::new(lazyfolio_bin())
        .args(["skills"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "skills should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Skills (All): 10"), "got: {stdout}");
    assert!(stdout.contains("[QA] Manual Testing (Web/Mobile)"));
    assert!(stdout.contains("[API] API Testing (Swagger)"));
}

#[test]
fn test_skills_group_filter() {
    let output = Command::new(lazyfolio_bin())
        .args(["skills", "--group", "api"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Skills (API): 1"), "got: {stdout}");
    assert!(stdout.contains("API Testing (Swagger)"));
    assert!(
        !stdout.contains("Manual Testing"),
        "Other groups should be filtered out"
    );
}

#[test]
fn test_skills_json_output() {
    let output = Command::new(lazyfolio_bin())
        .args(["skills", "--group", "tools", "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    assert_eq!(result["selection"], "Tools");
    assert_eq!(result["count"], 3);

    let skills = result["skills"].as_array().expect("Should have skills array");
    assert_eq!(skills.len(), 3);
    for skill in skills {
        assert!(skill["label"].is_string());
        assert_eq!(skill["group"], "tools");
    }
}

#[test]
fn test_skills_preserve_content_order() {
    let output = Command::new(lazyfolio_bin())
        .args(["skills", "--group", "tools", "--json"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    let labels: Vec<&str> = result["skills"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|skill| skill["label"].as_str())
        .collect();

    assert_eq!(
        labels,
        vec!["Jira / Confluence", "BrowserStack", "DevTools (Console/Network)"],
        "Filtering must keep the authored order"
    );
}

#[test]
fn test_skills_unknown_group() {
    let output = Command::new(lazyfolio_bin())
        .args(["skills", "--group", "devops"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(1),
        "Unknown group should exit with code 1"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown skill group 'devops'"), "got: {stderr}");
    assert!(
        stderr.contains("qa, a11y, api, tools, process"),
        "Error should list the valid group keys"
    );
}

#[test]
fn test_skills_with_content_file() {
    let (content_path, _temp_dir) = write_temp_content(&valid_content());

    let output = Command::new(lazyfolio_bin())
        .args([
            "skills",
            "--content",
            content_path.to_str().unwrap(),
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    assert_eq!(result["selection"], "All");
    assert_eq!(result["count"], 3);
    assert_eq!(result["skills"][0]["label"], "Exploratory Testing");
}

#[test]
fn test_skills_nonexistent_content_file() {
    let output = Command::new(lazyfolio_bin())
        .args(["skills", "--content", "/nonexistent/portfolio.toml"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(2),
        "Missing content file should exit with code 2"
    );
}
