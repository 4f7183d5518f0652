pub mod error;
pub mod utils;

pub use error::*;
pub use utils::changelog::{
    Changelog, ChangelogConfig, ChangelogEntry, Maintainer, VersionCheck, check_changelog_file,
    check_changelog_version, parse_changelog, parse_changelog_str, validate_changelog,
};
pub use utils::changelog_checker::{ChangelogChecker, ChangelogReport};
pub use utils::config::DebgateConfig;
pub use utils::copyright::{
    AuthorsBlock, CopyrightConfig, CopyrightGenerator, CopyrightTemplate, GenerationOutcome,
    GenerationStatus, content_digest, render_copyright, select_authors,
};
pub use utils::dist::{DistManifest, DistReport};
pub use utils::release::{ReleaseChecker, ReleaseReport};
pub use utils::severity::{Issue, IssueSeverity, IssueType};
pub use utils::severity_config::SeverityConfig;
pub use utils::version::{DebianVersion, debian_version};
