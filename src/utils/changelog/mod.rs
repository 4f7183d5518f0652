// debian/changelog parsing, lint and version gate

pub mod config;
pub mod gate;
pub mod parser;
pub mod types;
pub mod validator;

pub use config::ChangelogConfig;
pub use gate::{VersionCheck, check_changelog_file, check_changelog_version};
pub use parser::{parse_changelog, parse_changelog_str};
pub use types::{Changelog, ChangelogEntry, Maintainer};
pub use validator::validate_changelog;
