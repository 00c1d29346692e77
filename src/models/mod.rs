//! Data models for portfolio content.
//!
//! This module contains the content table the rest of the application
//! renders from. Models are designed to be independent of UI and
//! business logic.

pub mod experience;
pub mod links;
pub mod portfolio;
pub mod profile;
pub mod skill;

// Re-export all model types
pub use experience::ExperienceEntry;
pub use links::ContactLinks;
pub use portfolio::{Portfolio, ValidationIssue, ValidationReport};
pub use profile::Profile;
pub use skill::{Skill, SkillGroup};
