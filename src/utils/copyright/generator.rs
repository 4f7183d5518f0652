// copyright file generation

use super::authors::AuthorsBlock;
use super::config::CopyrightConfig;
use super::template::CopyrightTemplate;
use crate::error::{Error, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

/// splice the authors block between the template halves
pub fn render_copyright(template: &CopyrightTemplate, authors: &AuthorsBlock) -> Vec<u8> {
    let mut out = Vec::with_capacity(template.head.len() + template.tail.len());
    out.extend_from_slice(&template.head);
    out.extend_from_slice(&authors.render());
    out.extend_from_slice(&template.tail);
    out
}

/// hex sha-256 of some content
pub fn content_digest(content: &[u8]) -> String {
    hex::encode(Sha256::digest(content))
}

/// what happened to the output file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    /// output did not exist and was written
    Created,
    /// output existed with different content and was rewritten
    Updated,
    /// output already matched the rendered content
    Unchanged,
    /// check mode only: output is missing or differs
    Stale,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOutcome {
    pub output: PathBuf,
    pub status: GenerationStatus,
    pub digest: String,
    pub previous_digest: Option<String>,
    pub author_lines: usize,
}

impl GenerationOutcome {
    pub fn is_stale(&self) -> bool {
        self.status == GenerationStatus::Stale
    }
}

/// regenerates the copyright file
pub struct CopyrightGenerator;

impl CopyrightGenerator {
    // inputs are spliced as bytes, so latin-1 author names survive unchanged
    fn read(path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|e| Error::read(path, e))
    }

    /// render the copyright file content without touching the output
    pub fn render<P: AsRef<Path>>(srcdir: P, config: &CopyrightConfig) -> Result<(Vec<u8>, usize)> {
        let srcdir = srcdir.as_ref();
        let template_path = srcdir.join(&config.template);
        let authors_path = srcdir.join(&config.authors);

        let template_text = Self::read(&template_path)?;
        let template = CopyrightTemplate::parse(&template_text, &config.placeholder, &template_path)?;

        let authors_text = Self::read(&authors_path)?;
        let authors = AuthorsBlock::from_text(&authors_text, config.start_line, &config.indent);
        if authors.is_empty() {
            warn!(
                "no authors selected from {} starting at line {}",
                authors_path.display(),
                config.start_line
            );
        }
        debug!(
            "selected {} author lines from {}",
            authors.len(),
            authors_path.display()
        );

        Ok((render_copyright(&template, &authors), authors.len()))
    }

    fn previous_digest(output: &Path) -> Result<Option<String>> {
        match fs::read(output) {
            Ok(bytes) => Ok(Some(content_digest(&bytes))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::read(output, e)),
        }
    }

    /// write the copyright file if its content changed
    pub fn generate<P: AsRef<Path>>(srcdir: P, config: &CopyrightConfig) -> Result<GenerationOutcome> {
        let srcdir = srcdir.as_ref();
        let output = srcdir.join(&config.output);
        let (content, author_lines) = Self::render(srcdir, config)?;
        let digest = content_digest(&content);
        let previous_digest = Self::previous_digest(&output)?;

        let status = match &previous_digest {
            Some(previous) if *previous == digest => GenerationStatus::Unchanged,
            Some(_) => GenerationStatus::Updated,
            None => GenerationStatus::Created,
        };

        if status != GenerationStatus::Unchanged {
            fs::write(&output, &content).map_err(|e| Error::FileWriteError {
                path: output.clone(),
                source: e,
            })?;
            info!("wrote {}", output.display());
        } else {
            debug!("{} is up to date", output.display());
        }

        Ok(GenerationOutcome {
            output,
            status,
            digest,
            previous_digest,
            author_lines,
        })
    }

    /// compare the copyright file on disk with a fresh render, never writing
    pub fn check<P: AsRef<Path>>(srcdir: P, config: &CopyrightConfig) -> Result<GenerationOutcome> {
        let srcdir = srcdir.as_ref();
        let output = srcdir.join(&config.output);
        let (content, author_lines) = Self::render(srcdir, config)?;
        let digest = content_digest(&content);
        let previous_digest = Self::previous_digest(&output)?;

        let status = if previous_digest.as_deref() == Some(digest.as_str()) {
            GenerationStatus::Unchanged
        } else {
            GenerationStatus::Stale
        };

        Ok(GenerationOutcome {
            output,
            status,
            digest,
            previous_digest,
            author_lines,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_order() {
        let template = CopyrightTemplate {
            head: b"head\n".to_vec(),
            tail: b"tail\n".to_vec(),
        };
        let authors = AuthorsBlock {
            lines: vec![b"  A".to_vec(), b"  B".to_vec()],
        };
        assert_eq!(render_copyright(&template, &authors), b"head\n  A\n  B\ntail\n");
    }

    #[test]
    fn test_render_with_no_authors() {
        let template = CopyrightTemplate {
            head: b"head\n".to_vec(),
            tail: b"tail\n".to_vec(),
        };
        assert_eq!(
            render_copyright(&template, &AuthorsBlock::default()),
            b"head\ntail\n"
        );
    }

    #[test]
    fn test_content_digest() {
        assert_eq!(
            content_digest(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
