use crate::error::Result;
use crate::utils::changelog::{
    Changelog, ChangelogConfig, VersionCheck, check_changelog_file, parse_changelog,
    validate_changelog,
};
use crate::utils::severity::{Issue, IssueSeverity, IssueType, count_by_severity};
use crate::utils::severity_config::SeverityConfig;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const MIN_VERSION_WIDTH: usize = 10;

/// result of checking or linting one changelog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangelogReport {
    pub path: PathBuf,
    pub version_check: Option<VersionCheck>,
    pub changelog: Option<Changelog>,
    pub issues: Vec<Issue>,
    pub total_errors: usize,
    pub total_warnings: usize,
}

impl ChangelogReport {
    fn new(path: PathBuf) -> Self {
        Self {
            path,
            version_check: None,
            changelog: None,
            issues: Vec::new(),
            total_errors: 0,
            total_warnings: 0,
        }
    }

    fn add_issues(&mut self, issues: Vec<Issue>) {
        let (errors, warnings) = count_by_severity(&issues);
        self.total_errors += errors;
        self.total_warnings += warnings;
        self.issues.extend(issues);
    }

    pub fn has_errors(&self) -> bool {
        self.total_errors > 0
    }

    /// true when a version check ran and found its needle
    pub fn version_found(&self) -> bool {
        self.version_check.as_ref().is_some_and(VersionCheck::passed)
    }

    /// display parsed entries in table format
    pub fn display_table(&self) {
        let changelog = match &self.changelog {
            Some(changelog) => changelog,
            None => {
                println!("no changelog entries parsed.");
                return;
            }
        };

        println!("changelog: {}", self.path.display());
        println!("  entries: {}", changelog.entries.len());
        println!();

        let version_width = changelog
            .entries
            .iter()
            .map(|e| e.version.len())
            .max()
            .unwrap_or(MIN_VERSION_WIDTH)
            .max(MIN_VERSION_WIDTH);

        println!(
            "  {:<version_width$}  {:>5}  {:<12}  {:>7}  {:>7}",
            "Version",
            "Line",
            "Urgency",
            "Changes",
            "Trailer",
            version_width = version_width
        );
        println!(
            "  {}  -----  ------------  -------  -------",
            "-".repeat(version_width)
        );

        for entry in &changelog.entries {
            println!(
                "  {:<version_width$}  {:>5}  {:<12}  {:>7}  {:>7}",
                entry.version,
                entry.line_number,
                entry.urgency.as_deref().unwrap_or("-"),
                entry.changes.len(),
                if entry.has_trailer { "OK" } else { "MISS" },
                version_width = version_width
            );
        }

        println!();
    }

    /// display issues split by severity
    pub fn display_issues(&self) {
        if self.issues.is_empty() {
            println!("no changelog issues found.");
            return;
        }

        for (title, severity) in [
            ("changelog errors", IssueSeverity::Error),
            ("changelog warnings", IssueSeverity::Warning),
        ] {
            let selected: Vec<&Issue> =
                self.issues.iter().filter(|i| i.severity == severity).collect();
            if selected.is_empty() {
                continue;
            }
            println!("{}:", title);
            for issue in selected {
                println!("  {:<22}  {}", issue.issue_type.to_string(), issue.message);
            }
            println!();
        }
    }
}

/// changelog checker for the release version gate and lint
pub struct ChangelogChecker;

impl ChangelogChecker {
    fn lint_into(report: &mut ChangelogReport, config: &ChangelogConfig, severity: &SeverityConfig) {
        // the gate already read the file, so a vanished file is only a lint finding
        match parse_changelog(&report.path) {
            Ok(changelog) => {
                let issues = validate_changelog(&changelog, config, severity);
                report.add_issues(issues);
                report.changelog = Some(changelog);
            }
            Err(e) => report.add_issues(vec![
                severity.issue(IssueType::BadFormat, format!("failed to parse changelog: {}", e)),
            ]),
        }
    }

    /// run the release version gate against the changelog in `srcdir`
    ///
    /// lint findings are added when `config.lint_on_check` is set.
    pub fn check<P: AsRef<Path>>(
        srcdir: P,
        config: &ChangelogConfig,
        severity: &SeverityConfig,
        upstream: &str,
    ) -> Result<ChangelogReport> {
        let path = srcdir.as_ref().join(&config.path);
        let check = check_changelog_file(&path, upstream)?;
        let mut report = ChangelogReport::new(path);

        if check.passed() {
            info!(
                "{} mentions {} at line {}",
                report.path.display(),
                check.version.debian,
                check.line_number.unwrap_or_default()
            );
        } else {
            report.add_issues(vec![severity.issue(
                IssueType::MissingVersionEntry,
                format!(
                    "Update {} to mention version {}",
                    config.path.display(),
                    upstream
                ),
            )]);
        }
        report.version_check = Some(check);

        if config.lint_on_check {
            Self::lint_into(&mut report, config, severity);
        }

        Ok(report)
    }

    /// parse and lint the changelog in `srcdir`
    pub fn lint<P: AsRef<Path>>(
        srcdir: P,
        config: &ChangelogConfig,
        severity: &SeverityConfig,
    ) -> Result<ChangelogReport> {
        let path = srcdir.as_ref().join(&config.path);
        let changelog = parse_changelog(&path)?;
        let mut report = ChangelogReport::new(path);
        report.add_issues(validate_changelog(&changelog, config, severity));
        report.changelog = Some(changelog);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_changelog(text: &str) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("debian")).unwrap();
        fs::write(temp_dir.path().join("debian/changelog"), text).unwrap();
        temp_dir
    }

    #[test]
    fn test_gate_failure_is_an_error_issue() {
        let temp_dir = write_changelog("pkg (1.0) unstable; urgency=low\n");
        let report = ChangelogChecker::check(
            temp_dir.path(),
            &ChangelogConfig::default(),
            &SeverityConfig::lenient(),
            "2.0",
        )
        .unwrap();

        assert!(!report.version_found());
        assert!(report.has_errors());
        assert_eq!(
            report.issues[0].message,
            "Update debian/changelog to mention version 2.0"
        );
        // lint is off by default
        assert!(report.changelog.is_none());
    }

    #[test]
    fn test_gate_passes_on_unparsable_changelog() {
        let temp_dir = write_changelog("random text mentioning (1.0 somewhere\n");
        let report = ChangelogChecker::check(
            temp_dir.path(),
            &ChangelogConfig::default(),
            &SeverityConfig::default(),
            "1.0",
        )
        .unwrap();
        assert!(report.version_found());
        assert!(!report.has_errors());
    }

    #[test]
    fn test_lint_on_check_adds_findings() {
        let temp_dir = write_changelog("pkg (1.0) unstable; urgency=low\n");
        let config = ChangelogConfig::default().lint_on_check(true);
        let report =
            ChangelogChecker::check(temp_dir.path(), &config, &SeverityConfig::default(), "1.0")
                .unwrap();

        assert!(report.version_found());
        assert!(report.changelog.is_some());
        // no change lines, no trailer
        assert_eq!(report.total_warnings, 2);
        assert_eq!(report.total_errors, 0);
    }

    #[test]
    fn test_missing_changelog_is_a_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = ChangelogChecker::check(
            temp_dir.path(),
            &ChangelogConfig::default(),
            &SeverityConfig::default(),
            "1.0",
        );
        assert!(matches!(
            result,
            Err(crate::error::Error::FileReadError { .. })
        ));
    }
}
