// upstream to debian version spelling

use serde::{Deserialize, Serialize};
use std::fmt;

const PRE_RELEASE_MARKER: &str = "pre";
const DEBIAN_PRE_RELEASE_MARKER: &str = "~pre";

/// rewrite an upstream version into its debian spelling
///
/// the first `pre` becomes `~pre` so that pre-releases sort before the final
/// release under dpkg ordering. versions without `pre` are returned unchanged.
pub fn debian_version(upstream: &str) -> String {
    upstream.replacen(PRE_RELEASE_MARKER, DEBIAN_PRE_RELEASE_MARKER, 1)
}

/// an upstream version together with its debian spelling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebianVersion {
    pub upstream: String,
    pub debian: String,
}

impl DebianVersion {
    pub fn new(upstream: impl Into<String>) -> Self {
        let upstream = upstream.into();
        let debian = debian_version(&upstream);
        Self { upstream, debian }
    }

    /// text that a changelog header must contain to mention this version
    pub fn needle(&self) -> String {
        format!("({}", self.debian)
    }

    pub fn is_pre_release(&self) -> bool {
        self.upstream.contains(PRE_RELEASE_MARKER)
    }
}

impl fmt::Display for DebianVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.debian)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_version_unchanged() {
        assert_eq!(debian_version("2.5.0"), "2.5.0");
        assert_eq!(debian_version(""), "");
    }

    #[test]
    fn test_pre_release_gets_tilde() {
        assert_eq!(debian_version("2.5.pre1"), "2.5.~pre1");
        assert_eq!(debian_version("3.0.90pre"), "3.0.90~pre");
    }

    #[test]
    fn test_only_first_pre_is_rewritten() {
        assert_eq!(debian_version("pre.pre"), "~pre.pre");
    }

    #[test]
    fn test_needle() {
        let version = DebianVersion::new("2.5.pre1");
        assert_eq!(version.needle(), "(2.5.~pre1");
        assert!(version.is_pre_release());
        assert_eq!(version.to_string(), "2.5.~pre1");

        let release = DebianVersion::new("2.5.0");
        assert_eq!(release.needle(), "(2.5.0");
        assert!(!release.is_pre_release());
    }
}
