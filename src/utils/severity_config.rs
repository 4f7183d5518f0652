use super::severity::{Issue, IssueSeverity, IssueType};
use serde::{Deserialize, Serialize};

/// configuration for issue severity levels
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityConfig {
    /// severity for malformed changelog header lines
    pub bad_format: IssueSeverity,
    /// severity for changelog entries without change lines
    pub empty_entry: IssueSeverity,
    /// severity for changelog entries without a maintainer trailer
    pub missing_trailer: IssueSeverity,
    /// severity for trailer dates that are not RFC 2822
    pub bad_date: IssueSeverity,
    /// severity for urgencies outside the allowed set
    pub bad_urgency: IssueSeverity,
    /// severity for an out-of-date generated copyright file
    pub stale_copyright: IssueSeverity,
    /// severity for files listed in the dist manifest that do not exist
    pub missing_dist_file: IssueSeverity,
}

impl SeverityConfig {
    /// get severity for a specific issue type
    pub fn get_severity(&self, issue_type: IssueType) -> IssueSeverity {
        match issue_type {
            // the release version gate always fails the step
            IssueType::MissingVersionEntry => IssueSeverity::Error,
            IssueType::BadFormat => self.bad_format,
            IssueType::EmptyEntry => self.empty_entry,
            IssueType::MissingTrailer => self.missing_trailer,
            IssueType::BadDate => self.bad_date,
            IssueType::BadUrgency => self.bad_urgency,
            IssueType::StaleCopyright => self.stale_copyright,
            IssueType::MissingDistFile => self.missing_dist_file,
        }
    }

    /// build an issue with the configured severity for its type
    pub fn issue(&self, issue_type: IssueType, message: String) -> Issue {
        Issue::new(self.get_severity(issue_type), issue_type, message)
    }

    /// every configurable issue type reported as a warning
    pub fn lenient() -> Self {
        Self {
            bad_format: IssueSeverity::Warning,
            empty_entry: IssueSeverity::Warning,
            missing_trailer: IssueSeverity::Warning,
            bad_date: IssueSeverity::Warning,
            bad_urgency: IssueSeverity::Warning,
            stale_copyright: IssueSeverity::Warning,
            missing_dist_file: IssueSeverity::Warning,
        }
    }
}

impl Default for SeverityConfig {
    /// defaults:
    /// - error: bad header format, stale copyright, missing dist file
    /// - warning: empty entry, missing trailer, bad date, bad urgency
    fn default() -> Self {
        Self {
            bad_format: IssueSeverity::Error,
            empty_entry: IssueSeverity::Warning,
            missing_trailer: IssueSeverity::Warning,
            bad_date: IssueSeverity::Warning,
            bad_urgency: IssueSeverity::Warning,
            stale_copyright: IssueSeverity::Error,
            missing_dist_file: IssueSeverity::Error,
        }
    }
}
