// copyright generation configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// configuration for copyright generation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyrightConfig {
    /// template relative to the source directory (default: "debian/copyright.in")
    pub template: PathBuf,

    /// authors list relative to the source directory (default: "AUTHORS.rst")
    pub authors: PathBuf,

    /// generated file relative to the source directory (default: "debian/copyright")
    pub output: PathBuf,

    /// marker whose line is replaced by the authors block
    pub placeholder: String,

    /// first line (1-based) of the authors list to copy
    pub start_line: usize,

    /// prefix added to every copied authors line
    pub indent: String,
}

impl CopyrightConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn template(mut self, path: impl Into<PathBuf>) -> Self {
        self.template = path.into();
        self
    }

    pub fn authors(mut self, path: impl Into<PathBuf>) -> Self {
        self.authors = path.into();
        self
    }

    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn start_line(mut self, line: usize) -> Self {
        self.start_line = line;
        self
    }

    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }
}

impl Default for CopyrightConfig {
    fn default() -> Self {
        Self {
            template: PathBuf::from("debian/copyright.in"),
            authors: PathBuf::from("AUTHORS.rst"),
            output: PathBuf::from("debian/copyright"),
            placeholder: "%AUTHORS%".to_string(),
            start_line: 34,
            indent: "  ".to_string(),
        }
    }
}
