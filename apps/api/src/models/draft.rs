//! Resume draft — the parsed output of the generation LLM call.
//!
//! Experience and project bullets are keyed by normalized role/project names so
//! the renderer can join them back to the profile, which drives section order.
//! A draft is produced once per request and consumed once by the renderer.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeDraft {
    pub summary: String,
    /// Deduplicated, ordered by JD priority (the generator enforces ordering).
    pub skills: Vec<String>,
    /// normalized role key → normalized project key → bullets
    pub experience: HashMap<String, HashMap<String, Vec<String>>>,
    /// normalized standalone-project key → bullets
    pub projects: HashMap<String, Vec<String>>,
}

impl ResumeDraft {
    /// True when the LLM produced no usable content at all.
    pub fn is_empty(&self) -> bool {
        self.summary.trim().is_empty()
            && self.skills.is_empty()
            && self.experience.values().all(|p| p.values().all(Vec::is_empty))
            && self.projects.values().all(Vec::is_empty)
    }
}

/// Normalizes a role/project name into a join key: lowercase, alphanumerics only.
/// "Billing Platform v2" and "billing platform V2" map to the same key.
pub fn normalize_key(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}
