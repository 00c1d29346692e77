//! Plain-document renderers for the export subcommand.
//!
//! Renders the portfolio to Markdown or plain text. Both renderers are
//! pure functions from the content table to a String; file writing and
//! stdout handling live in the CLI layer.

use chrono::Datelike;
use std::fmt::Write as _;

use crate::models::Portfolio;

/// Output format for the export subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// GitHub-flavored Markdown
    Markdown,
    /// Plain text with underlined headings
    Text,
}

impl ExportFormat {
    /// Parses a format from its CLI key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Some(Self::Markdown),
            "text" | "txt" | "plain" => Some(Self::Text),
            _ => None,
        }
    }

    /// Canonical CLI key for this format.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Text => "text",
        }
    }
}

/// Renders the portfolio in the requested format.
#[must_use]
pub fn render(portfolio: &Portfolio, format: ExportFormat) -> String {
    match format {
        ExportFormat::Markdown => render_markdown(portfolio),
        ExportFormat::Text => render_text(portfolio),
    }
}

/// Renders the portfolio as a Markdown document.
#[must_use]
pub fn render_markdown(portfolio: &Portfolio) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# {}", portfolio.profile.name);
    output.push('\n');
    let _ = writeln!(output, "{}", portfolio.profile.title);
    if !portfolio.profile.availability.is_empty() {
        output.push('\n');
        let _ = writeln!(output, "> {}", portfolio.profile.availability);
    }
    if !portfolio.profile.tagline.is_empty() {
        output.push('\n');
        let _ = writeln!(output, "**{}**", portfolio.profile.tagline);
    }
    if !portfolio.profile.intro.is_empty() {
        output.push('\n');
        let _ = writeln!(output, "{}", portfolio.profile.intro);
    }

    output.push_str("\n## About\n\n");
    let _ = writeln!(output, "{}", portfolio.profile.summary);
    if !portfolio.profile.focus.is_empty() {
        output.push('\n');
        let _ = writeln!(output, "- **Focus:** {}", portfolio.profile.focus);
    }
    if !portfolio.profile.strength.is_empty() {
        let _ = writeln!(output, "- **Strength:** {}", portfolio.profile.strength);
    }

    output.push_str("\n## Skills\n\n");
    for skill in &portfolio.skills {
        let _ = writeln!(output, "- [{}] {}", skill.group.label(), skill.label);
    }

    output.push_str("\n## Experience\n");
    for entry in &portfolio.experience {
        output.push('\n');
        let _ = writeln!(output, "### {}", entry.heading());
        output.push('\n');
        let _ = writeln!(output, "_{}_", entry.period);
        if !entry.bullets.is_empty() {
            output.push('\n');
            for bullet in &entry.bullets {
                let _ = writeln!(output, "- {bullet}");
            }
        }
    }

    output.push_str("\n## Contact\n\n");
    let _ = writeln!(output, "- **Email:** {}", portfolio.links.email);
    let _ = writeln!(output, "- **LinkedIn:** {}", portfolio.links.linkedin);
    if portfolio.links.has_cv() {
        let _ = writeln!(
            output,
            "- **CV:** {}",
            portfolio.links.cv.as_deref().unwrap_or_default()
        );
    }

    output.push_str("\n---\n\n");
    let _ = writeln!(output, "{}", footer_line(portfolio));

    output
}

/// Renders the portfolio as plain text.
#[must_use]
pub fn render_text(portfolio: &Portfolio) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "{}", portfolio.profile.name.to_uppercase());
    let _ = writeln!(output, "{}", portfolio.profile.title);
    if !portfolio.profile.availability.is_empty() {
        let _ = writeln!(output, "{}", portfolio.profile.availability);
    }
    if !portfolio.profile.tagline.is_empty() {
        output.push('\n');
        let _ = writeln!(output, "{}", portfolio.profile.tagline);
    }
    if !portfolio.profile.intro.is_empty() {
        output.push('\n');
        let _ = writeln!(output, "{}", portfolio.profile.intro);
    }

    push_text_heading(&mut output, "About");
    let _ = writeln!(output, "{}", portfolio.profile.summary);
    if !portfolio.profile.focus.is_empty() {
        output.push('\n');
        let _ = writeln!(output, "Focus:    {}", portfolio.profile.focus);
    }
    if !portfolio.profile.strength.is_empty() {
        let _ = writeln!(output, "Strength: {}", portfolio.profile.strength);
    }

    push_text_heading(&mut output, "Skills");
    for skill in &portfolio.skills {
        let _ = writeln!(output, "- [{}] {}", skill.group.label(), skill.label);
    }

    push_text_heading(&mut output, "Experience");
    for (index, entry) in portfolio.experience.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        let _ = writeln!(output, "{}", entry.heading());
        let _ = writeln!(output, "{}", entry.period);
        for bullet in &entry.bullets {
            let _ = writeln!(output, "  - {bullet}");
        }
    }

    push_text_heading(&mut output, "Contact");
    let _ = writeln!(output, "Email:    {}", portfolio.links.email);
    let _ = writeln!(output, "LinkedIn: {}", portfolio.links.linkedin);
    if portfolio.links.has_cv() {
        let _ = writeln!(
            output,
            "CV:       {}",
            portfolio.links.cv.as_deref().unwrap_or_default()
        );
    }

    output.push('\n');
    let _ = writeln!(output, "{}", footer_line(portfolio));

    output
}

/// The copyright/updated footer line shared by both formats.
#[must_use]
pub fn footer_line(portfolio: &Portfolio) -> String {
    let year = chrono::Local::now().year();
    match portfolio.profile.updated {
        Some(date) => format!(
            "© {year} {} · Updated {}",
            portfolio.profile.name,
            date.format("%B %Y")
        ),
        None => format!("© {year} {}", portfolio.profile.name),
    }
}

fn push_text_heading(output: &mut String, title: &str) {
    output.push('\n');
    let upper = title.to_uppercase();
    let _ = writeln!(output, "{upper}");
    let _ = writeln!(output, "{}", "-".repeat(upper.chars().count()));
}
