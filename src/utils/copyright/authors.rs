// authors list selection

/// select the authors lines starting at `start_line` (1-based)
///
/// selection stops before the first empty line, or at end of file. a start
/// past the end of the file selects nothing; 0 is treated as 1. lines are
/// returned without their newline and are not decoded.
pub fn select_authors(text: &[u8], start_line: usize) -> Vec<&[u8]> {
    text.split_inclusive(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\n").unwrap_or(line))
        .skip(start_line.saturating_sub(1))
        .take_while(|line| !line.is_empty())
        .collect()
}

/// authors lines ready to splice into the template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorsBlock {
    pub lines: Vec<Vec<u8>>,
}

impl AuthorsBlock {
    pub fn from_text(text: &[u8], start_line: usize, indent: &str) -> Self {
        let lines = select_authors(text, start_line)
            .into_iter()
            .map(|line| [indent.as_bytes(), line].concat())
            .collect();
        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// the block as bytes, one newline-terminated line per author line
    pub fn render(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for line in &self.lines {
            out.extend_from_slice(line);
            out.push(b'\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUTHORS: &[u8] = b"header\nmore header\n\nAlice   alice@example.org\nBob     bob@example.org\n\nThanks to\nCarol\n";

    fn lines(selected: Vec<&[u8]>) -> Vec<String> {
        selected
            .into_iter()
            .map(|l| String::from_utf8_lossy(l).into_owned())
            .collect()
    }

    #[test]
    fn test_select_stops_at_blank_line() {
        assert_eq!(
            lines(select_authors(AUTHORS, 4)),
            vec!["Alice   alice@example.org", "Bob     bob@example.org"]
        );
    }

    #[test]
    fn test_select_runs_to_end_of_file() {
        assert_eq!(lines(select_authors(AUTHORS, 7)), vec!["Thanks to", "Carol"]);
        assert_eq!(lines(select_authors(b"a\nb", 1)), vec!["a", "b"]);
    }

    #[test]
    fn test_start_on_blank_line_selects_nothing() {
        assert!(select_authors(AUTHORS, 3).is_empty());
    }

    #[test]
    fn test_start_past_end() {
        assert!(select_authors(AUTHORS, 100).is_empty());
        assert!(select_authors(b"", 1).is_empty());
    }

    #[test]
    fn test_start_zero_is_first_line() {
        assert_eq!(
            lines(select_authors(AUTHORS, 0)),
            vec!["header", "more header"]
        );
    }

    #[test]
    fn test_whitespace_line_is_not_blank() {
        assert_eq!(lines(select_authors(b"a\n \nb\n\nc\n", 1)), vec!["a", " ", "b"]);
    }

    #[test]
    fn test_block_indents_lines() {
        let block = AuthorsBlock::from_text(AUTHORS, 4, "  ");
        assert_eq!(block.len(), 2);
        assert_eq!(
            block.render(),
            b"  Alice   alice@example.org\n  Bob     bob@example.org\n"
        );
    }

    #[test]
    fn test_block_keeps_latin1_bytes() {
        let block = AuthorsBlock::from_text(b"Fran\xe7ois\n", 1, "  ");
        assert_eq!(block.render(), b"  Fran\xe7ois\n");
    }
}
