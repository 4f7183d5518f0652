pub mod changelog;
pub mod changelog_checker;
pub mod config;
pub mod copyright;
pub mod dist;
pub mod release;
pub mod severity;
pub mod severity_config;
pub mod version;

pub mod testing;
