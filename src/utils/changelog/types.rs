// changelog data structures

use crate::utils::severity::Issue;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// maintainer named in an entry trailer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maintainer {
    pub name: String,
    pub email: String,
}

/// a single `package (version) dists; urgency=level` stanza
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangelogEntry {
    pub package: String,
    pub version: String,
    pub distributions: Vec<String>,
    pub urgency: Option<String>,
    pub changes: Vec<String>,
    pub has_trailer: bool,
    pub maintainer: Option<Maintainer>,
    pub date: Option<DateTime<FixedOffset>>,
    pub line_number: usize,
}

impl ChangelogEntry {
    pub fn new(package: String, version: String, line_number: usize) -> Self {
        Self {
            package,
            version,
            distributions: Vec::new(),
            urgency: None,
            changes: Vec::new(),
            has_trailer: false,
            maintainer: None,
            date: None,
            line_number,
        }
    }

    pub fn add_change(&mut self, line: impl Into<String>) {
        self.changes.push(line.into());
    }
}

/// represents a complete debian/changelog file
///
/// entries keep file order, so the first entry is the most recent one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Changelog {
    pub path: PathBuf,
    pub entries: Vec<ChangelogEntry>,
    pub format_issues: Vec<Issue>,
}

impl Changelog {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            entries: Vec::new(),
            format_issues: Vec::new(),
        }
    }

    pub fn add_entry(&mut self, entry: ChangelogEntry) {
        self.entries.push(entry);
    }

    /// most recent entry
    pub fn latest(&self) -> Option<&ChangelogEntry> {
        self.entries.first()
    }

    pub fn get_version(&self, version: &str) -> Option<&ChangelogEntry> {
        self.entries.iter().find(|e| e.version == version)
    }

    pub fn has_version(&self, version: &str) -> bool {
        self.get_version(version).is_some()
    }
}
