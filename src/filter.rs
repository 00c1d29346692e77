//! Category filtering for the skills grid.
//!
//! The filter bar is a closed set of pills: "All" plus one pill per
//! skill group. Deriving the visible list is pure and order-preserving;
//! nothing about the selection is persisted.

use crate::models::{Skill, SkillGroup};

/// The active choice in the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkillSelection {
    /// Every skill, in content order.
    #[default]
    All,
    /// Only skills in one group.
    Group(SkillGroup),
}

impl SkillSelection {
    /// Pills in bar order: All first, then every group.
    pub const ALL: [Self; 6] = [
        Self::All,
        Self::Group(SkillGroup::Qa),
        Self::Group(SkillGroup::A11y),
        Self::Group(SkillGroup::Api),
        Self::Group(SkillGroup::Tools),
        Self::Group(SkillGroup::Process),
    ];

    /// Label shown on the pill.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Group(group) => group.label(),
        }
    }

    /// The pill to the right, wrapping at the end.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|pill| *pill == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// The pill to the left, wrapping at the start.
    #[must_use]
    pub fn previous(self) -> Self {
        let index = Self::ALL.iter().position(|pill| *pill == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Whether a skill passes this selection.
    #[must_use]
    pub fn matches(self, skill: &Skill) -> bool {
        match self {
            Self::All => true,
            Self::Group(group) => skill.group == group,
        }
    }
}

/// Applies a selection to a skill list, preserving content order.
#[must_use]
pub fn filter_skills(skills: &[Skill], selection: SkillSelection) -> Vec<&Skill> {
    skills
        .iter()
        .filter(|skill| selection.matches(skill))
        .collect()
}
