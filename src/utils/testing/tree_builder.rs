// builder for creating test source trees

use crate::utils::config::CONFIG_FILE_NAME;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TEST_MAINTAINER: &str = "Debgate Test <test@debgate.test>";
pub const TEST_DATE: &str = "Mon, 04 Jan 2016 10:00:00 -0800";

/// represents a changelog entry to be written
#[derive(Debug, Clone)]
pub struct TestChangelogEntry {
    pub package: String,
    pub version: String,
    pub urgency: String,
    pub changes: Vec<String>,
}

impl TestChangelogEntry {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            package: "openvswitch".to_string(),
            version: version.into(),
            urgency: "low".to_string(),
            changes: vec!["New upstream version.".to_string()],
        }
    }

    pub fn urgency(mut self, urgency: impl Into<String>) -> Self {
        self.urgency = urgency.into();
        self
    }

    pub fn change(mut self, change: impl Into<String>) -> Self {
        self.changes.push(change.into());
        self
    }

    pub fn no_changes(mut self) -> Self {
        self.changes.clear();
        self
    }

    fn render(&self) -> String {
        let mut out = format!(
            "{} ({}) unstable; urgency={}\n\n",
            self.package, self.version, self.urgency
        );
        for change in &self.changes {
            out.push_str(&format!("  * {}\n", change));
        }
        out.push_str(&format!("\n -- {}  {}\n\n", TEST_MAINTAINER, TEST_DATE));
        out
    }
}

/// builder for test source trees
pub struct TestTreeBuilder {
    changelog: Vec<TestChangelogEntry>,
    files: BTreeMap<PathBuf, String>, // relative path -> content
    config: Option<String>,
}

impl TestTreeBuilder {
    pub fn new() -> Self {
        Self {
            changelog: Vec::new(),
            files: BTreeMap::new(),
            config: None,
        }
    }

    /// add a changelog entry; entries are written in the order added, newest first
    pub fn changelog_entry(mut self, entry: TestChangelogEntry) -> Self {
        self.changelog.push(entry);
        self
    }

    pub fn file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// write a `debgate.toml` at the tree root
    pub fn config(mut self, toml: impl Into<String>) -> Self {
        self.config = Some(toml.into());
        self
    }

    /// build the tree in a temporary directory
    pub fn build(self) -> Result<TestTree, Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path().to_path_buf();

        if !self.changelog.is_empty() {
            let text: String = self.changelog.iter().map(|e| e.render()).collect();
            write_file(&root, Path::new("debian/changelog"), text.as_bytes())?;
        }

        for (path, content) in &self.files {
            write_file(&root, path, content.as_bytes())?;
        }

        if let Some(config) = &self.config {
            write_file(&root, Path::new(CONFIG_FILE_NAME), config.as_bytes())?;
        }

        Ok(TestTree {
            path: root,
            _temp_dir: temp_dir,
        })
    }
}

impl Default for TestTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn write_file(root: &Path, relative: &Path, content: &[u8]) -> std::io::Result<()> {
    let full = root.join(relative);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(full, content)
}

/// a source tree on disk, removed when dropped
pub struct TestTree {
    path: PathBuf,
    _temp_dir: TempDir,
}

impl TestTree {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self, relative: impl AsRef<Path>) -> std::io::Result<String> {
        fs::read_to_string(self.path.join(relative))
    }

    pub fn read_bytes(&self, relative: impl AsRef<Path>) -> std::io::Result<Vec<u8>> {
        fs::read(self.path.join(relative))
    }

    pub fn write(&self, relative: impl AsRef<Path>, content: &str) -> std::io::Result<()> {
        write_file(&self.path, relative.as_ref(), content.as_bytes())
    }

    /// write raw bytes, for files that are not valid UTF-8
    pub fn write_bytes(&self, relative: impl AsRef<Path>, content: &[u8]) -> std::io::Result<()> {
        write_file(&self.path, relative.as_ref(), content)
    }
}
