use serde::{Deserialize, Serialize};
use std::fmt;

/// severity level for issues detected during a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    /// error-level issue that should cause the step to fail
    Error,
    /// warning-level issue that is informational only
    Warning,
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueSeverity::Error => write!(f, "ERROR"),
            IssueSeverity::Warning => write!(f, "WARN"),
        }
    }
}

impl std::str::FromStr for IssueSeverity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(IssueSeverity::Error),
            "warning" | "warn" => Ok(IssueSeverity::Warning),
            _ => Err(format!("invalid severity: {}, use 'error' or 'warning'", s)),
        }
    }
}

/// type of issue detected while checking packaging files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueType {
    /// changelog does not mention the version being released
    MissingVersionEntry,
    /// changelog header line is malformed
    BadFormat,
    /// changelog entry has no change lines
    EmptyEntry,
    /// changelog entry has no ` -- maintainer  date` trailer
    MissingTrailer,
    /// trailer date is not RFC 2822
    BadDate,
    /// urgency is not one of the allowed values
    BadUrgency,
    /// generated copyright file differs from what the template renders
    StaleCopyright,
    /// a file listed in the dist manifest does not exist
    MissingDistFile,
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueType::MissingVersionEntry => write!(f, "missing_version_entry"),
            IssueType::BadFormat => write!(f, "bad_format"),
            IssueType::EmptyEntry => write!(f, "empty_entry"),
            IssueType::MissingTrailer => write!(f, "missing_trailer"),
            IssueType::BadDate => write!(f, "bad_date"),
            IssueType::BadUrgency => write!(f, "bad_urgency"),
            IssueType::StaleCopyright => write!(f, "stale_copyright"),
            IssueType::MissingDistFile => write!(f, "missing_dist_file"),
        }
    }
}

/// structured issue with severity, type, and message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// severity level of the issue
    pub severity: IssueSeverity,
    /// type of the issue
    pub issue_type: IssueType,
    /// human-readable message describing the issue
    pub message: String,
}

impl Issue {
    /// create a new issue
    pub fn new(severity: IssueSeverity, issue_type: IssueType, message: String) -> Self {
        Self {
            severity,
            issue_type,
            message,
        }
    }

    /// check if this is an error-level issue
    pub fn is_error(&self) -> bool {
        self.severity == IssueSeverity::Error
    }

    /// check if this is a warning-level issue
    pub fn is_warning(&self) -> bool {
        self.severity == IssueSeverity::Warning
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

/// count errors and warnings in a slice of issues
pub fn count_by_severity(issues: &[Issue]) -> (usize, usize) {
    let errors = issues.iter().filter(|i| i.is_error()).count();
    (errors, issues.len() - errors)
}
