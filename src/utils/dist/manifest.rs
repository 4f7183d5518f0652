// packaging files that must ship in the source tarball

use crate::utils::severity::{Issue, IssueType};
use crate::utils::severity_config::SeverityConfig;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// list of files, relative to the source directory, required in the tarball
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DistManifest {
    pub files: Vec<PathBuf>,
}

impl DistManifest {
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    /// manifest entries in order, each path once
    pub fn unique_files(&self) -> Vec<&Path> {
        let mut seen = HashSet::new();
        self.files
            .iter()
            .map(PathBuf::as_path)
            .filter(|p| seen.insert(*p))
            .collect()
    }

    /// check which manifest entries exist under `srcdir`
    pub fn verify<P: AsRef<Path>>(&self, srcdir: P) -> DistReport {
        let srcdir = srcdir.as_ref();
        let mut report = DistReport::default();

        for file in self.unique_files() {
            if srcdir.join(file).is_file() {
                report.present.push(file.to_path_buf());
            } else {
                debug!("dist file missing: {}", file.display());
                report.missing.push(file.to_path_buf());
            }
        }

        report
    }
}

impl Default for DistManifest {
    fn default() -> Self {
        Self {
            files: [
                "debian/changelog",
                "debian/compat",
                "debian/control",
                "debian/copyright",
                "debian/copyright.in",
                "debian/rules",
                "debian/source/format",
            ]
            .into_iter()
            .map(PathBuf::from)
            .collect(),
        }
    }
}

/// result of verifying a manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DistReport {
    pub present: Vec<PathBuf>,
    pub missing: Vec<PathBuf>,
}

impl DistReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn issues(&self, severity: &SeverityConfig) -> Vec<Issue> {
        self.missing
            .iter()
            .map(|p| {
                severity.issue(
                    IssueType::MissingDistFile,
                    format!("missing dist file {}", p.display()),
                )
            })
            .collect()
    }

    pub fn display_table(&self) {
        println!("dist manifest:");
        println!("  present: {}", self.present.len());
        println!("  missing: {}", self.missing.len());
        for path in &self.missing {
            println!("    MISS  {}", path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_unique_files_keeps_order() {
        let manifest = DistManifest::new()
            .file("debian/rules")
            .file("debian/control")
            .file("debian/rules");
        assert_eq!(
            manifest.unique_files(),
            vec![Path::new("debian/rules"), Path::new("debian/control")]
        );
    }

    #[test]
    fn test_verify_reports_missing_in_order() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("debian")).unwrap();
        fs::write(temp_dir.path().join("debian/control"), "Source: x\n").unwrap();
        // a directory does not satisfy a file entry
        fs::create_dir(temp_dir.path().join("debian/rules")).unwrap();

        let manifest = DistManifest::new()
            .file("debian/rules")
            .file("debian/control")
            .file("debian/changelog");
        let report = manifest.verify(temp_dir.path());

        assert!(!report.is_complete());
        assert_eq!(report.present, vec![PathBuf::from("debian/control")]);
        assert_eq!(
            report.missing,
            vec![PathBuf::from("debian/rules"), PathBuf::from("debian/changelog")]
        );

        let issues = report.issues(&SeverityConfig::default());
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.is_error()));
    }

    #[test]
    fn test_empty_manifest_is_complete() {
        let temp_dir = TempDir::new().unwrap();
        assert!(DistManifest::new().verify(temp_dir.path()).is_complete());
    }
}
