// changelog lint rules

use super::config::ChangelogConfig;
use super::types::{Changelog, ChangelogEntry};
use crate::utils::severity::{Issue, IssueType};
use crate::utils::severity_config::SeverityConfig;

/// validate a changelog against configuration rules
///
/// parser findings are re-graded with the configured severities.
pub fn validate_changelog(
    changelog: &Changelog,
    config: &ChangelogConfig,
    severity: &SeverityConfig,
) -> Vec<Issue> {
    let mut issues: Vec<Issue> = changelog
        .format_issues
        .iter()
        .map(|i| severity.issue(i.issue_type, i.message.clone()))
        .collect();

    if changelog.entries.is_empty() {
        issues.push(severity.issue(
            IssueType::BadFormat,
            format!("{} has no entries", changelog.path.display()),
        ));
    }

    for entry in &changelog.entries {
        issues.extend(validate_entry(entry, config, severity));
    }

    issues
}

/// validate a single changelog entry
fn validate_entry(
    entry: &ChangelogEntry,
    config: &ChangelogConfig,
    severity: &SeverityConfig,
) -> Vec<Issue> {
    let mut issues = Vec::new();

    if entry.changes.is_empty() {
        issues.push(severity.issue(
            IssueType::EmptyEntry,
            format!(
                "line {}: version {} has no change lines",
                entry.line_number, entry.version
            ),
        ));
    }

    match &entry.urgency {
        Some(urgency) if !config.is_allowed_urgency(urgency) => {
            issues.push(severity.issue(
                IssueType::BadUrgency,
                format!(
                    "line {}: invalid urgency '{}' (allowed: {:?})",
                    entry.line_number, urgency, config.allowed_urgencies
                ),
            ));
        }
        Some(_) => {}
        None => {
            issues.push(severity.issue(
                IssueType::BadUrgency,
                format!(
                    "line {}: version {} has no urgency",
                    entry.line_number, entry.version
                ),
            ));
        }
    }

    if config.require_trailer && !entry.has_trailer {
        issues.push(severity.issue(
            IssueType::MissingTrailer,
            format!(
                "line {}: version {} has no maintainer trailer",
                entry.line_number, entry.version
            ),
        ));
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::changelog::parser::parse_changelog_str;
    use crate::utils::severity::IssueSeverity;

    fn entry() -> ChangelogEntry {
        let mut entry = ChangelogEntry::new("pkg".to_string(), "1.0".to_string(), 1);
        entry.distributions = vec!["unstable".to_string()];
        entry.urgency = Some("low".to_string());
        entry.add_change("* fix");
        entry.has_trailer = true;
        entry
    }

    #[test]
    fn test_validate_entry_valid() {
        let config = ChangelogConfig::default();
        let severity = SeverityConfig::default();
        assert!(validate_entry(&entry(), &config, &severity).is_empty());
    }

    #[test]
    fn test_validate_entry_invalid_urgency() {
        let config = ChangelogConfig::default();
        let severity = SeverityConfig::default();
        let mut entry = entry();
        entry.urgency = Some("someday".to_string());

        let issues = validate_entry(&entry, &config, &severity);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].issue_type, IssueType::BadUrgency);
        assert_eq!(issues[0].severity, IssueSeverity::Warning);
    }

    #[test]
    fn test_validate_entry_missing_trailer() {
        let severity = SeverityConfig::default();
        let mut entry = entry();
        entry.has_trailer = false;

        let strict = ChangelogConfig::default();
        assert_eq!(validate_entry(&entry, &strict, &severity).len(), 1);

        let relaxed = ChangelogConfig::default().require_trailer(false);
        assert!(validate_entry(&entry, &relaxed, &severity).is_empty());
    }

    #[test]
    fn test_parser_issues_are_regraded() {
        let changelog = parse_changelog_str("c", "garbage line\n");
        let issues = validate_changelog(
            &changelog,
            &ChangelogConfig::default(),
            &SeverityConfig::lenient(),
        );
        // the garbage header plus the "no entries" finding
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.is_warning()));
    }
}
