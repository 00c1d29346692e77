//! Skill entries and the closed set of skill groups.

use serde::{Deserialize, Serialize};

/// Category a skill belongs to.
///
/// The set is closed: every skill carries exactly one group, and the
/// filter bar offers exactly these groups plus an implicit "All".
/// Serialized in lowercase (`qa`, `a11y`, `api`, `tools`, `process`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillGroup {
    /// Hands-on testing disciplines.
    Qa,
    /// Accessibility auditing and compliance.
    A11y,
    /// API-level testing.
    Api,
    /// Tooling and platforms.
    Tools,
    /// Process and collaboration.
    Process,
}

impl SkillGroup {
    /// All groups, in the order the filter bar presents them.
    pub const ALL: [Self; 5] = [Self::Qa, Self::A11y, Self::Api, Self::Tools, Self::Process];

    /// Short uppercase label used for filter pills and group tags.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Qa => "QA",
            Self::A11y => "A11Y",
            Self::Api => "API",
            Self::Tools => "Tools",
            Self::Process => "Process",
        }
    }

    /// Stable lowercase key, matching the serialized form.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Qa => "qa",
            Self::A11y => "a11y",
            Self::Api => "api",
            Self::Tools => "tools",
            Self::Process => "process",
        }
    }

    /// Parses a group from its key, case-insensitively.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "qa" => Some(Self::Qa),
            "a11y" => Some(Self::A11y),
            "api" => Some(Self::Api),
            "tools" => Some(Self::Tools),
            "process" => Some(Self::Process),
            _ => None,
        }
    }
}

/// A single skill as it appears in the skills grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Display label (e.g., "API Testing (Swagger)")
    pub label: String,
    /// Group the filter bar matches against
    pub group: SkillGroup,
}

impl Skill {
    /// Creates a new skill with the given label and group.
    pub fn new(label: impl Into<String>, group: SkillGroup) -> Self {
        Self {
            label: label.into(),
            group,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_key_round_trip() {
        for group in SkillGroup::ALL {
            assert_eq!(SkillGroup::from_key(group.key()), Some(group));
        }
    }

    #[test]
    fn test_group_from_key_case_insensitive() {
        assert_eq!(SkillGroup::from_key("A11Y"), Some(SkillGroup::A11y));
        assert_eq!(SkillGroup::from_key("Tools"), Some(SkillGroup::Tools));
    }

    #[test]
    fn test_group_from_key_unknown() {
        assert_eq!(SkillGroup::from_key("design"), None);
        assert_eq!(SkillGroup::from_key(""), None);
    }

    #[test]
    fn test_group_serializes_lowercase() {
        let json = serde_json::to_string(&SkillGroup::A11y).unwrap();
        assert_eq!(json, "\"a11y\"");
    }

    #[test]
    fn test_skill_new() {
        let skill = Skill::new("BrowserStack", SkillGroup::Tools);
        assert_eq!(skill.label, "BrowserStack");
        assert_eq!(skill.group, SkillGroup::Tools);
    }
}
