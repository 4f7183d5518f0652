// pre-tarball release checks

use crate::error::Result;
use crate::utils::changelog_checker::{ChangelogChecker, ChangelogReport};
use crate::utils::config::DebgateConfig;
use crate::utils::copyright::{CopyrightGenerator, GenerationOutcome};
use crate::utils::dist::DistReport;
use crate::utils::severity::{Issue, IssueType, count_by_severity};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// combined result of every check run before building a tarball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseReport {
    pub changelog: ChangelogReport,
    pub copyright: GenerationOutcome,
    pub dist: DistReport,
    pub issues: Vec<Issue>,
    pub total_errors: usize,
    pub total_warnings: usize,
}

impl ReleaseReport {
    pub fn passed(&self) -> bool {
        self.total_errors == 0
    }

    pub fn display_summary(&self) {
        println!("release checks:");
        println!(
            "  changelog version: {}",
            if self.changelog.version_found() { "OK" } else { "MISS" }
        );
        println!(
            "  copyright: {}",
            if self.copyright.is_stale() { "STALE" } else { "OK" }
        );
        println!(
            "  dist files: {}/{}",
            self.dist.present.len(),
            self.dist.present.len() + self.dist.missing.len()
        );
        println!();

        for issue in &self.issues {
            println!("  {}", issue);
        }
        if !self.issues.is_empty() {
            println!();
        }
    }
}

pub struct ReleaseChecker;

impl ReleaseChecker {
    /// run the changelog gate, the copyright staleness check and the dist manifest check
    pub fn check<P: AsRef<Path>>(
        srcdir: P,
        config: &DebgateConfig,
        upstream: &str,
    ) -> Result<ReleaseReport> {
        let srcdir = srcdir.as_ref();

        let changelog =
            ChangelogChecker::check(srcdir, &config.changelog, &config.severity, upstream)?;
        let copyright = CopyrightGenerator::check(srcdir, &config.copyright)?;
        let dist = config.dist.verify(srcdir);

        let mut issues = changelog.issues.clone();
        if copyright.is_stale() {
            issues.push(config.severity.issue(
                IssueType::StaleCopyright,
                format!(
                    "{} is out of date, regenerate it from {}",
                    config.copyright.output.display(),
                    config.copyright.template.display()
                ),
            ));
        }
        issues.extend(dist.issues(&config.severity));

        let (total_errors, total_warnings) = count_by_severity(&issues);
        debug!(
            "release checks: {} error(s), {} warning(s)",
            total_errors, total_warnings
        );

        Ok(ReleaseReport {
            changelog,
            copyright,
            dist,
            issues,
            total_errors,
            total_warnings,
        })
    }
}
