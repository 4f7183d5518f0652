// changelog configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// configuration for changelog checks
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// changelog location relative to the source directory (default: "debian/changelog")
    pub path: PathBuf,

    /// allowed urgency values; empty allows anything
    pub allowed_urgencies: Vec<String>,

    /// require every entry to end with a ` -- maintainer  date` trailer
    pub require_trailer: bool,

    /// run lint rules as part of the version gate
    pub lint_on_check: bool,
}

impl ChangelogConfig {
    /// create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn allowed_urgencies(mut self, urgencies: Vec<String>) -> Self {
        self.allowed_urgencies = urgencies;
        self
    }

    pub fn require_trailer(mut self, required: bool) -> Self {
        self.require_trailer = required;
        self
    }

    pub fn lint_on_check(mut self, lint: bool) -> Self {
        self.lint_on_check = lint;
        self
    }

    /// check if an urgency value is allowed
    ///
    /// a parenthesised comment after the level (`medium (security fix)`) is ignored.
    pub fn is_allowed_urgency(&self, urgency: &str) -> bool {
        if self.allowed_urgencies.is_empty() {
            return true;
        }
        let level = urgency.split_whitespace().next().unwrap_or("");
        self.allowed_urgencies
            .iter()
            .any(|u| u.eq_ignore_ascii_case(level))
    }
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("debian/changelog"),
            allowed_urgencies: vec![
                "low".to_string(),
                "medium".to_string(),
                "high".to_string(),
                "emergency".to_string(),
                "critical".to_string(),
            ],
            require_trailer: true,
            lint_on_check: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_matching() {
        let config = ChangelogConfig::default();
        assert!(config.is_allowed_urgency("low"));
        assert!(config.is_allowed_urgency("MEDIUM"));
        assert!(config.is_allowed_urgency("high (security)"));
        assert!(!config.is_allowed_urgency("whenever"));
    }

    #[test]
    fn test_empty_allow_list_accepts_anything() {
        let config = ChangelogConfig::new().allowed_urgencies(Vec::new());
        assert!(config.is_allowed_urgency("whenever"));
    }
}
