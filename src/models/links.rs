//! Contact details and outbound links.

use serde::{Deserialize, Serialize};

/// Contact channels shown in the hero and the contact section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLinks {
    /// Primary contact address, also the copy-email target
    pub email: String,
    /// LinkedIn profile URL
    pub linkedin: String,
    /// Optional link to a hosted CV
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv: Option<String>,
    /// Short blurb rendered next to the contact actions
    #[serde(default)]
    pub note: String,
}

impl ContactLinks {
    /// Whether a CV link is configured and non-empty.
    #[must_use]
    pub fn has_cv(&self) -> bool {
        self.cv.as_deref().is_some_and(|url| !url.trim().is_empty())
    }
}
