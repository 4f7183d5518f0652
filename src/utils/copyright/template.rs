// copyright template split around the placeholder line

use crate::error::{Error, Result};
use std::path::Path;

/// template bytes on either side of the placeholder line
///
/// the placeholder line itself is dropped. everything else, line endings and
/// non-UTF-8 bytes included, is kept byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyrightTemplate {
    pub head: Vec<u8>,
    pub tail: Vec<u8>,
}

fn contains(line: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || line.windows(needle.len()).any(|w| w == needle)
}

impl CopyrightTemplate {
    /// split `text` at the first line containing `placeholder`
    ///
    /// `path` is only used for the error message.
    pub fn parse(text: &[u8], placeholder: &str, path: &Path) -> Result<Self> {
        let mut head = Vec::new();
        let mut tail = Vec::new();
        let mut found = false;

        for line in text.split_inclusive(|&b| b == b'\n') {
            if found {
                tail.extend_from_slice(line);
            } else if contains(line, placeholder.as_bytes()) {
                found = true;
            } else {
                head.extend_from_slice(line);
            }
        }

        if !found {
            return Err(Error::PlaceholderNotFound {
                path: path.to_path_buf(),
                placeholder: placeholder.to_string(),
            });
        }

        Ok(Self { head, tail })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_around_placeholder() {
        let text = b"Upstream Authors:\n\n%AUTHORS%\n\nCopyright:\n";
        let template = CopyrightTemplate::parse(text, "%AUTHORS%", Path::new("t")).unwrap();
        assert_eq!(template.head, b"Upstream Authors:\n\n");
        assert_eq!(template.tail, b"\nCopyright:\n");
    }

    #[test]
    fn test_whole_line_is_replaced() {
        let text = b"a\n  see %AUTHORS% here\nb";
        let template = CopyrightTemplate::parse(text, "%AUTHORS%", Path::new("t")).unwrap();
        assert_eq!(template.head, b"a\n");
        assert_eq!(template.tail, b"b");
    }

    #[test]
    fn test_only_first_placeholder_is_used() {
        let text = b"%AUTHORS%\nmiddle\n%AUTHORS%\n";
        let template = CopyrightTemplate::parse(text, "%AUTHORS%", Path::new("t")).unwrap();
        assert!(template.head.is_empty());
        assert_eq!(template.tail, b"middle\n%AUTHORS%\n");
    }

    #[test]
    fn test_latin1_bytes_pass_through() {
        let text = b"Copyright \xa9 Nicira\n%AUTHORS%\nFran\xe7ais\n";
        let template = CopyrightTemplate::parse(text, "%AUTHORS%", Path::new("t")).unwrap();
        assert_eq!(template.head, b"Copyright \xa9 Nicira\n");
        assert_eq!(template.tail, b"Fran\xe7ais\n");
    }

    #[test]
    fn test_missing_placeholder() {
        let err = CopyrightTemplate::parse(
            b"no marker\n",
            "%AUTHORS%",
            Path::new("debian/copyright.in"),
        )
        .unwrap_err();
        assert!(matches!(err, Error::PlaceholderNotFound { .. }));
        assert!(err.to_string().contains("debian/copyright.in"));
    }
}
