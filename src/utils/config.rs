use super::changelog::ChangelogConfig;
use super::copyright::CopyrightConfig;
use super::dist::DistManifest;
use super::severity_config::SeverityConfig;
use crate::error::Result;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "debgate.toml";

/// main configuration for debgate
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DebgateConfig {
    /// changelog-related configuration
    #[serde(default)]
    pub changelog: ChangelogConfig,

    /// copyright generation configuration
    #[serde(default)]
    pub copyright: CopyrightConfig,

    /// files required in the source distribution
    #[serde(default)]
    pub dist: DistManifest,

    /// severity per issue type
    #[serde(default)]
    pub severity: SeverityConfig,
}

impl DebgateConfig {
    /// load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| crate::error::Error::read(path, e))?;

        let config: DebgateConfig =
            toml::from_str(&contents).map_err(|e| crate::error::Error::TomlParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// find and load configuration file in the source directory
    ///
    /// looks for `debgate.toml` in the source directory root
    /// returns default config if the file is not found or cannot be parsed
    pub fn load_or_default<P: AsRef<Path>>(srcdir: P) -> Self {
        match Self::find_config_file(&srcdir) {
            Some(config_path) => Self::load_from_file(&config_path).unwrap_or_else(|e| {
                warn!("ignoring configuration: {}", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// find configuration file in the source directory
    pub fn find_config_file<P: AsRef<Path>>(srcdir: P) -> Option<PathBuf> {
        let config_path = srcdir.as_ref().join(CONFIG_FILE_NAME);

        if config_path.is_file() {
            Some(config_path)
        } else {
            None
        }
    }
}
