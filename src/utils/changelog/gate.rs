// release version gate

use crate::error::{Error, Result};
use crate::utils::version::DebianVersion;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// outcome of searching a changelog for a release version
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionCheck {
    pub version: DebianVersion,
    pub needle: String,
    /// 1-based line of the first match
    pub line_number: Option<usize>,
}

impl VersionCheck {
    pub fn passed(&self) -> bool {
        self.line_number.is_some()
    }

    /// turn a failed check into the error the build step reports
    pub fn into_result(self, changelog_path: &Path) -> Result<Self> {
        if self.passed() {
            Ok(self)
        } else {
            Err(Error::ChangelogVersionMissing {
                path: changelog_path.to_path_buf(),
                version: self.version.upstream,
            })
        }
    }
}

/// search changelog text for `(` followed by the debian spelling of `upstream`
///
/// this is a plain substring match on each line; the changelog does not need
/// to parse for the check to pass.
pub fn check_changelog_version(text: &str, upstream: &str) -> VersionCheck {
    let version = DebianVersion::new(upstream);
    let needle = version.needle();

    let line_number = text
        .lines()
        .position(|line| line.contains(&needle))
        .map(|index| index + 1);

    debug!("searched changelog for '{}': {:?}", needle, line_number);

    VersionCheck {
        version,
        needle,
        line_number,
    }
}

/// read a changelog file and run the version search on it
///
/// bytes that are not UTF-8 (latin-1 in old entries) never match the needle
/// and do not stop the search.
pub fn check_changelog_file<P: AsRef<Path>>(path: P, upstream: &str) -> Result<VersionCheck> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| Error::read(path, e))?;
    Ok(check_changelog_version(&String::from_utf8_lossy(&bytes), upstream))
}
