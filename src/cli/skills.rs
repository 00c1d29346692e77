//! Skill listing command with group filtering.

use crate::cli::common::{CliError, CliResult};
use crate::content;
use crate::filter::{filter_skills, SkillSelection};
use crate::models::SkillGroup;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// List skills, optionally filtered to one group
#[derive(Debug, Clone, Args)]
pub struct SkillsArgs {
    /// Path to portfolio content TOML file (defaults to the embedded content)
    #[arg(short, long, value_name = "FILE")]
    pub content: Option<PathBuf>,

    /// Only list skills in this group (qa, a11y, api, tools, process)
    #[arg(short, long, value_name = "GROUP")]
    pub group: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SkillsResult {
    selection: String,
    count: usize,
    skills: Vec<SkillRow>,
}

#[derive(Debug, Serialize)]
struct SkillRow {
    label: String,
    group: String,
}

impl SkillsArgs {
    /// Execute the skills command
    pub fn execute(&self) -> CliResult<()> {
        let selection = match &self.group {
            None => SkillSelection::All,
            Some(key) => SkillGroup::from_key(key)
                .map(SkillSelection::Group)
                .ok_or_else(|| {
                    CliError::validation(format!(
                        "Unknown skill group '{key}'. Expected one of: qa, a11y, api, tools, process"
                    ))
                })?,
        };

        let portfolio = content::resolve(self.content.as_deref(), None)
            .map_err(|e| CliError::io(format!("Failed to load content: {e}")))?;

        let filtered = filter_skills(&portfolio.skills, selection);

        let result = SkillsResult {
            selection: selection.label().to_string(),
            count: filtered.len(),
            skills: filtered
                .iter()
                .map(|skill| SkillRow {
                    label: skill.label.clone(),
                    group: skill.group.key().to_string(),
                })
                .collect(),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Skills ({}): {}", result.selection, result.count);
            for skill in &filtered {
                println!("  [{}] {}", skill.group.label(), skill.label);
            }
        }

        Ok(())
    }
}
