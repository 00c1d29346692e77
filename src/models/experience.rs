//! Work history entries.

use serde::{Deserialize, Serialize};

/// One position in the experience timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// Role title (e.g., "Senior QA Engineer")
    pub title: String,
    /// Employer name
    pub company: String,
    /// Human-readable date range (e.g., "Apr 2024 – Sep 2024")
    pub period: String,
    /// Impact bullets shown under the heading
    #[serde(default)]
    pub bullets: Vec<String>,
}

impl ExperienceEntry {
    /// Creates a new entry with an empty bullet list.
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        period: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            period: period.into(),
            bullets: Vec::new(),
        }
    }

    /// Heading line combining role and employer.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{} — {}", self.title, self.company)
    }
}
