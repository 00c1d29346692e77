//! The portfolio aggregate and content validation.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::{ContactLinks, ExperienceEntry, Profile, Skill};

/// The complete content table the application renders from.
///
/// Loaded once at startup and treated as immutable afterwards; all UI
/// state (scroll, filter, reveal, toast) lives outside of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Identity and headline content
    pub profile: Profile,
    /// Contact channels
    pub links: ContactLinks,
    /// Skills in display order
    #[serde(default)]
    pub skills: Vec<Skill>,
    /// Work history, most recent first
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
}

/// A single validation finding tied to a content area.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    /// Content area the finding belongs to ("profile", "contact", "skills", "experience")
    pub area: String,
    /// Human-readable description
    pub message: String,
}

/// Outcome of validating portfolio content.
///
/// Errors make the content unusable for rendering; warnings flag
/// things worth fixing but do not block loading.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Fatal problems
    pub errors: Vec<ValidationIssue>,
    /// Non-fatal findings
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// True when no errors were recorded (warnings allowed).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, area: &str, message: impl Into<String>) {
        self.errors.push(ValidationIssue {
            area: area.to_string(),
            message: message.into(),
        });
    }

    fn warning(&mut self, area: &str, message: impl Into<String>) {
        self.warnings.push(ValidationIssue {
            area: area.to_string(),
            message: message.into(),
        });
    }
}

/// Longest summary that still reads as a 10-second scan.
const SUMMARY_WARN_CHARS: usize = 600;

/// Largest skill list before the grid stops being scannable.
const SKILLS_WARN_COUNT: usize = 24;

impl Portfolio {
    /// Validates the content and collects every finding.
    ///
    /// Never fails early: the report lists all errors and warnings so
    /// a user can fix a content file in one pass.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();
        self.validate_profile(&mut report);
        self.validate_contact(&mut report);
        self.validate_skills(&mut report);
        self.validate_experience(&mut report);
        report
    }

    fn validate_profile(&self, report: &mut ValidationReport) {
        if self.profile.name.trim().is_empty() {
            report.error("profile", "Name cannot be empty");
        }
        if self.profile.title.trim().is_empty() {
            report.error("profile", "Title cannot be empty");
        }
        let summary_len = self.profile.summary.chars().count();
        if summary_len > SUMMARY_WARN_CHARS {
            report.warning(
                "profile",
                format!("Summary is {summary_len} characters; keep it under {SUMMARY_WARN_CHARS} so recruiters can scan it"),
            );
        }
    }

    fn validate_contact(&self, report: &mut ValidationReport) {
        let email_regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();

        if self.links.email.trim().is_empty() {
            report.error("contact", "Email cannot be empty");
        } else if !email_regex.is_match(&self.links.email) {
            report.error(
                "contact",
                format!("Email '{}' is not a valid address", self.links.email),
            );
        }

        if self.links.linkedin.trim().is_empty() {
            report.error("contact", "LinkedIn URL cannot be empty");
        } else if !is_http_url(&self.links.linkedin) {
            report.error(
                "contact",
                format!("LinkedIn URL '{}' must start with http:// or https://", self.links.linkedin),
            );
        }

        if self.links.has_cv() {
            let cv = self.links.cv.as_deref().unwrap_or_default();
            if !is_http_url(cv) {
                report.error(
                    "contact",
                    format!("CV URL '{cv}' must start with http:// or https://"),
                );
            }
        }
    }

    fn validate_skills(&self, report: &mut ValidationReport) {
        if self.skills.is_empty() {
            report.error("skills", "Skill list cannot be empty");
            return;
        }

        for (index, skill) in self.skills.iter().enumerate() {
            if skill.label.trim().is_empty() {
                report.error("skills", format!("Skill {} has an empty label", index + 1));
            }
        }

        let mut seen: Vec<&str> = Vec::new();
        for skill in &self.skills {
            let label = skill.label.as_str();
            if seen.contains(&label) {
                report.warning("skills", format!("Duplicate skill label '{label}'"));
            } else {
                seen.push(label);
            }
        }

        if self.skills.len() > SKILLS_WARN_COUNT {
            report.warning(
                "skills",
                format!(
                    "{} skills listed; more than {SKILLS_WARN_COUNT} stops being scannable",
                    self.skills.len()
                ),
            );
        }
    }

    fn validate_experience(&self, report: &mut ValidationReport) {
        if self.experience.is_empty() {
            report.error("experience", "Experience list cannot be empty");
            return;
        }

        // Accepts "Apr 2024 – Sep 2024" and plain-hyphen variants.
        let period_regex = Regex::new(r"^.+ [–-] .+$").unwrap();

        for (index, entry) in self.experience.iter().enumerate() {
            let position = index + 1;
            if entry.title.trim().is_empty() {
                report.error("experience", format!("Entry {position} has an empty title"));
            }
            if entry.company.trim().is_empty() {
                report.error("experience", format!("Entry {position} has an empty company"));
            }
            if entry.period.trim().is_empty() {
                report.error("experience", format!("Entry {position} has an empty period"));
            } else if !period_regex.is_match(&entry.period) {
                report.warning(
                    "experience",
                    format!(
                        "Entry {position} period '{}' is not a '<start> – <end>' range",
                        entry.period
                    ),
                );
            }
            if entry.bullets.is_empty() {
                report.warning(
                    "experience",
                    format!("Entry {position} ('{}') has no bullets", entry.heading()),
                );
            }
        }
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SkillGroup;

    fn sample() -> Portfolio {
        Portfolio {
            profile: Profile {
                name: "Mari Zakadze".to_string(),
                title: "Senior QA".to_string(),
                availability: "Open to opportunities".to_string(),
                tagline: "Recruiter-friendly clarity.".to_string(),
                intro: "Stable releases through hands-on testing.".to_string(),
                summary: "Senior QA engineer.".to_string(),
                focus: "Quality & UX".to_string(),
                strength: "Clarity & detail".to_string(),
                chips: vec!["Manual Testing".to_string()],
                updated: None,
            },
            links: ContactLinks {
                email: "qa@example.com".to_string(),
                linkedin: "https://www.linkedin.com/in/example".to_string(),
                cv: None,
                note: "Email is the fastest way.".to_string(),
            },
            skills: vec![
                Skill::new("Manual Testing (Web/Mobile)", SkillGroup::Qa),
                Skill::new("API Testing (Swagger)", SkillGroup::Api),
            ],
            experience: vec![{
                let mut entry =
                    ExperienceEntry::new("Senior QA Engineer", "Moncero", "Apr 2024 – Sep 2024");
                entry.bullets.push("API testing for functionality.".to_string());
                entry
            }],
        }
    }

    #[test]
    fn test_valid_content_passes() {
        let report = sample().validate();
        assert!(report.is_valid(), "unexpected errors: {:?}", report.errors);
        assert!(report.warnings.is_empty(), "unexpected warnings: {:?}", report.warnings);
    }

    #[test]
    fn test_empty_name_and_title_fail() {
        let mut portfolio = sample();
        portfolio.profile.name.clear();
        portfolio.profile.title = "   ".to_string();

        let report = portfolio.validate();
        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors.iter().all(|issue| issue.area == "profile"));
    }

    #[test]
    fn test_malformed_email_fails() {
        let mut portfolio = sample();
        portfolio.links.email = "not-an-address".to_string();

        let report = portfolio.validate();
        assert!(!report.is_valid());
        assert!(report.errors[0].message.contains("not-an-address"));
    }

    #[test]
    fn test_non_http_linkedin_fails() {
        let mut portfolio = sample();
        portfolio.links.linkedin = "www.linkedin.com/in/example".to_string();

        assert!(!portfolio.validate().is_valid());
    }

    #[test]
    fn test_blank_cv_is_ignored() {
        let mut portfolio = sample();
        portfolio.links.cv = Some(String::new());

        assert!(portfolio.validate().is_valid());
    }

    #[test]
    fn test_non_http_cv_fails() {
        let mut portfolio = sample();
        portfolio.links.cv = Some("ftp://example.com/cv.pdf".to_string());

        assert!(!portfolio.validate().is_valid());
    }

    #[test]
    fn test_empty_skills_fail() {
        let mut portfolio = sample();
        portfolio.skills.clear();

        let report = portfolio.validate();
        assert!(!report.is_valid());
        assert_eq!(report.errors[0].area, "skills");
    }

    #[test]
    fn test_duplicate_skill_warns() {
        let mut portfolio = sample();
        portfolio
            .skills
            .push(Skill::new("API Testing (Swagger)", SkillGroup::Api));

        let report = portfolio.validate();
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].message.contains("Duplicate"));
    }

    #[test]
    fn test_long_summary_warns() {
        let mut portfolio = sample();
        portfolio.profile.summary = "x".repeat(601);

        let report = portfolio.validate();
        assert!(report.is_valid());
        assert!(report.warnings[0].message.contains("601"));
    }

    #[test]
    fn test_empty_experience_fails() {
        let mut portfolio = sample();
        portfolio.experience.clear();

        assert!(!portfolio.validate().is_valid());
    }

    #[test]
    fn test_entry_without_bullets_warns() {
        let mut portfolio = sample();
        portfolio.experience[0].bullets.clear();

        let report = portfolio.validate();
        assert!(report.is_valid());
        assert!(report.warnings[0].message.contains("no bullets"));
    }

    #[test]
    fn test_odd_period_shape_warns() {
        let mut portfolio = sample();
        portfolio.experience[0].period = "2024".to_string();

        let report = portfolio.validate();
        assert!(report.is_valid());
        assert!(report.warnings[0].message.contains("range"));
    }

    #[test]
    fn test_hyphen_period_accepted() {
        let mut portfolio = sample();
        portfolio.experience[0].period = "Aug 2023 - Apr 2024".to_string();

        let report = portfolio.validate();
        assert!(report.warnings.is_empty());
    }
}
