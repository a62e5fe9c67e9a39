//! Candidate profile — the fixed base facts the resume is generated against.
//!
//! Loaded once at startup from `PROFILE_PATH`. Companies, roles, dates, and
//! education pass through to the PDF verbatim; the LLM only writes prose
//! around them.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub links: Links,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    /// Standalone projects outside any employment role.
    #[serde(default)]
    pub projects: Vec<ProjectRef>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Links {
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
}

/// One employment role, with the projects worked on during it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub projects: Vec<ProjectRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRef {
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    #[serde(default)]
    pub cgpa: String,
    pub year: String,
}

impl Profile {
    /// Loads and deserializes the profile JSON from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile file '{}'", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Profile file '{}' is not valid JSON", path.display()))
    }

    /// Single wrapped contact line for the PDF header: non-empty parts joined by " | ".
    pub fn contact_line(&self) -> String {
        [
            self.email.trim(),
            self.phone.trim(),
            self.links.linkedin.trim(),
            self.links.github.trim(),
        ]
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" | ")
    }
}
