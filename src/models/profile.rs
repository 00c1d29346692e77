//! Identity and headline content.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The person and headline block of the portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Full display name
    pub name: String,
    /// Role line under the name (e.g., "Senior QA · Accessibility")
    pub title: String,
    /// Availability badge text
    #[serde(default)]
    pub availability: String,
    /// Short headline opening the hero block
    #[serde(default)]
    pub tagline: String,
    /// Hero paragraph under the headline
    #[serde(default)]
    pub intro: String,
    /// About paragraph
    #[serde(default)]
    pub summary: String,
    /// "Focus" mini-card value
    #[serde(default)]
    pub focus: String,
    /// "Strength" mini-card value
    #[serde(default)]
    pub strength: String,
    /// Chip labels shown under the hero headline
    #[serde(default)]
    pub chips: Vec<String>,
    /// Date the content was last updated, shown in the footer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<NaiveDate>,
}

impl Profile {
    /// Uppercase initials used for the monogram badge.
    #[must_use]
    pub fn monogram(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str) -> Profile {
        Profile {
            name: name.to_string(),
            title: "QA".to_string(),
            availability: String::new(),
            tagline: String::new(),
            intro: String::new(),
            summary: String::new(),
            focus: String::new(),
            strength: String::new(),
            chips: Vec::new(),
            updated: None,
        }
    }

    #[test]
    fn test_monogram_two_words() {
        assert_eq!(profile("Mari Zakadze").monogram(), "MZ");
    }

    #[test]
    fn test_monogram_caps_at_two_initials() {
        assert_eq!(profile("Anna Maria Rossi").monogram(), "AM");
    }

    #[test]
    fn test_monogram_single_word_and_empty() {
        assert_eq!(profile("mari").monogram(), "M");
        assert_eq!(profile("").monogram(), "");
    }
}
