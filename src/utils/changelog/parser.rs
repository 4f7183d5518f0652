// debian/changelog parser

use super::types::{Changelog, ChangelogEntry, Maintainer};
use crate::error::{Error, Result};
use crate::utils::severity::{Issue, IssueSeverity, IssueType};
use chrono::DateTime;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

const TRAILER_PREFIX: &str = " -- ";
const OLD_CHANGELOG_MARKER: &str = "Old Changelog:";

/// parse a changelog file
///
/// invalid UTF-8 is replaced rather than rejected, old entries are often latin-1.
pub fn parse_changelog<P: AsRef<Path>>(path: P) -> Result<Changelog> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| Error::read(path, e))?;
    Ok(parse_changelog_str(path, &String::from_utf8_lossy(&bytes)))
}

/// parse changelog text already in memory
///
/// parsing never fails: malformed lines become format issues on the result.
pub fn parse_changelog_str<P: Into<PathBuf>>(path: P, content: &str) -> Changelog {
    let mut changelog = Changelog::new(path.into());
    let mut current: Option<ChangelogEntry> = None;
    // set after a malformed header until the next valid one; the stanza's
    // body and trailer are already covered by the header issue
    let mut in_bad_stanza = false;

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;

        if line.trim().is_empty() {
            continue;
        }

        // everything after this marker is free-form history
        if line.starts_with(OLD_CHANGELOG_MARKER) {
            break;
        }

        if line.starts_with(TRAILER_PREFIX) {
            match current.take() {
                Some(mut entry) => {
                    let issues =
                        parse_trailer(&line[TRAILER_PREFIX.len()..], line_number, &mut entry);
                    changelog.format_issues.extend(issues);
                    changelog.add_entry(entry);
                }
                None if in_bad_stanza => in_bad_stanza = false,
                None => changelog.format_issues.push(bad_format(format!(
                    "line {}: trailer found outside of an entry",
                    line_number
                ))),
            }
            continue;
        }

        if line.starts_with(char::is_whitespace) {
            match current.as_mut() {
                Some(entry) => entry.add_change(line.trim()),
                None if in_bad_stanza => {}
                None => changelog.format_issues.push(bad_format(format!(
                    "line {}: change line found outside of an entry",
                    line_number
                ))),
            }
            continue;
        }

        // column zero: a new entry header
        if let Some(prev) = current.take() {
            changelog.add_entry(prev);
        }

        match parse_header(line, line_number) {
            Ok(entry) => {
                debug!(
                    "changelog entry {} {} at line {}",
                    entry.package, entry.version, line_number
                );
                current = Some(entry);
                in_bad_stanza = false;
            }
            Err(reason) => {
                in_bad_stanza = true;
                changelog.format_issues.push(bad_format(format!(
                    "line {}: {} in '{}'",
                    line_number, reason, line
                )));
            }
        }
    }

    // keep a trailing entry that never got its trailer
    if let Some(entry) = current {
        changelog.add_entry(entry);
    }

    changelog
}

fn bad_format(message: String) -> Issue {
    Issue::new(IssueSeverity::Error, IssueType::BadFormat, message)
}

/// parse `package (version) dist1 dist2; urgency=level`
fn parse_header(line: &str, line_number: usize) -> std::result::Result<ChangelogEntry, String> {
    let open = line.find('(').ok_or("missing '(' before version")?;
    let package = line[..open].trim();
    if package.is_empty() {
        return Err("empty package name".to_string());
    }
    if package.contains(char::is_whitespace) {
        return Err(format!("package name '{}' contains whitespace", package));
    }

    let rest = &line[open + 1..];
    let close = rest.find(')').ok_or("unclosed parenthesis around version")?;
    let version = rest[..close].trim();
    if version.is_empty() {
        return Err("empty version".to_string());
    }

    let mut entry = ChangelogEntry::new(package.to_string(), version.to_string(), line_number);

    let tail = &rest[close + 1..];
    let (dists, metadata) = match tail.split_once(';') {
        Some((dists, metadata)) => (dists, metadata),
        None => (tail, ""),
    };

    entry.distributions = dists.split_whitespace().map(str::to_string).collect();
    if entry.distributions.is_empty() {
        return Err("no distribution after version".to_string());
    }

    for pair in metadata.split(',') {
        if let Some((key, value)) = pair.trim().split_once('=')
            && key.trim().eq_ignore_ascii_case("urgency")
        {
            entry.urgency = Some(value.trim().to_string());
        }
    }

    Ok(entry)
}

/// parse `Name <email>  date` and attach the result to the entry
fn parse_trailer(text: &str, line_number: usize, entry: &mut ChangelogEntry) -> Vec<Issue> {
    let mut issues = Vec::new();
    entry.has_trailer = true;

    let (open, close) = match (text.find('<'), text.find('>')) {
        (Some(open), Some(close)) if open < close => (open, close),
        _ => {
            issues.push(Issue::new(
                IssueSeverity::Error,
                IssueType::MissingTrailer,
                format!(
                    "line {}: malformed trailer, expected ' -- name <email>  date'",
                    line_number
                ),
            ));
            return issues;
        }
    };

    entry.maintainer = Some(Maintainer {
        name: text[..open].trim().to_string(),
        email: text[open + 1..close].trim().to_string(),
    });

    let date = text[close + 1..].trim();
    match DateTime::parse_from_rfc2822(date) {
        Ok(parsed) => entry.date = Some(parsed),
        Err(e) => issues.push(Issue::new(
            IssueSeverity::Error,
            IssueType::BadDate,
            format!("line {}: invalid date '{}' ({})", line_number, date, e),
        )),
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
openvswitch (2.5.~pre1-1) unstable; urgency=low

  * New upstream pre-release.
  * Second change.

 -- Open vSwitch team <dev@openvswitch.org>  Mon, 04 Jan 2016 10:00:00 -0800

openvswitch (2.4.0-1) unstable; urgency=medium

  * New upstream version

 -- Open vSwitch team <dev@openvswitch.org>  Fri, 21 Aug 2015 16:49:05 -0700
";

    #[test]
    fn test_parse_header_full() {
        let entry = parse_header("openvswitch (2.5.0-1) unstable experimental; urgency=high", 3)
            .unwrap();
        assert_eq!(entry.package, "openvswitch");
        assert_eq!(entry.version, "2.5.0-1");
        assert_eq!(entry.distributions, vec!["unstable", "experimental"]);
        assert_eq!(entry.urgency.as_deref(), Some("high"));
        assert_eq!(entry.line_number, 3);
    }

    #[test]
    fn test_parse_header_errors() {
        assert!(parse_header("openvswitch 2.5.0 unstable", 1).is_err());
        assert!(parse_header("openvswitch (2.5.0 unstable", 1).is_err());
        assert!(parse_header("(2.5.0) unstable; urgency=low", 1).is_err());
        assert!(parse_header("openvswitch () unstable; urgency=low", 1).is_err());
        assert!(parse_header("openvswitch (2.5.0); urgency=low", 1).is_err());
    }

    #[test]
    fn test_parse_sample() {
        let changelog = parse_changelog_str("debian/changelog", SAMPLE);
        assert!(changelog.format_issues.is_empty());
        assert_eq!(changelog.entries.len(), 2);

        let latest = changelog.latest().unwrap();
        assert_eq!(latest.version, "2.5.~pre1-1");
        assert_eq!(latest.changes.len(), 2);
        assert_eq!(latest.changes[0], "* New upstream pre-release.");
        assert!(latest.has_trailer);
        assert_eq!(
            latest.maintainer.as_ref().unwrap().email,
            "dev@openvswitch.org"
        );
        assert!(latest.date.is_some());

        assert!(changelog.has_version("2.4.0-1"));
        assert_eq!(changelog.get_version("2.4.0-1").unwrap().line_number, 8);
    }

    #[test]
    fn test_bad_trailer_date() {
        let text = "pkg (1.0) unstable; urgency=low\n\n  * x\n\n -- A <a@b.c>  yesterday\n";
        let changelog = parse_changelog_str("c", text);
        assert_eq!(changelog.entries.len(), 1);
        assert_eq!(changelog.format_issues.len(), 1);
        assert_eq!(changelog.format_issues[0].issue_type, IssueType::BadDate);
    }

    #[test]
    fn test_malformed_trailer() {
        let text = "pkg (1.0) unstable; urgency=low\n  * x\n -- nobody\n";
        let changelog = parse_changelog_str("c", text);
        assert_eq!(changelog.format_issues.len(), 1);
        assert_eq!(
            changelog.format_issues[0].issue_type,
            IssueType::MissingTrailer
        );
        assert!(changelog.entries[0].maintainer.is_none());
    }

    #[test]
    fn test_change_outside_entry() {
        let changelog = parse_changelog_str("c", "  * orphan\n");
        assert!(changelog.entries.is_empty());
        assert_eq!(changelog.format_issues.len(), 1);
        assert!(changelog.format_issues[0].message.starts_with("line 1:"));
    }

    #[test]
    fn test_bad_header_reports_once_per_stanza() {
        let text = "\
pkg 1.0 unstable; urgency=low

  * first
  * second

 -- A <a@b.c>  Mon, 04 Jan 2016 10:00:00 -0800

pkg (0.9) unstable; urgency=low

  * older

 -- A <a@b.c>  Mon, 04 Jan 2016 10:00:00 -0800
";
        let changelog = parse_changelog_str("c", text);
        assert_eq!(changelog.format_issues.len(), 1);
        assert!(changelog.format_issues[0].message.starts_with("line 1:"));
        assert_eq!(changelog.entries.len(), 1);
        assert_eq!(changelog.entries[0].version, "0.9");
    }

    #[test]
    fn test_orphan_lines_after_bad_stanza_trailer_are_reported() {
        // the bad stanza ends at its trailer, so a stray line after it counts again
        let text = "bad header\n  * x\n -- A <a@b.c>  Mon, 04 Jan 2016 10:00:00 -0800\n  * stray\n";
        let changelog = parse_changelog_str("c", text);
        assert_eq!(changelog.format_issues.len(), 2);
        assert!(changelog.format_issues[1].message.starts_with("line 4:"));
    }

    #[test]
    fn test_old_changelog_marker_stops_parsing() {
        let text = "pkg (1.0) unstable; urgency=low\n  * x\n -- A <a@b.c>  Mon, 04 Jan 2016 10:00:00 -0800\nOld Changelog:\nnot a header at all\n";
        let changelog = parse_changelog_str("c", text);
        assert!(changelog.format_issues.is_empty());
        assert_eq!(changelog.entries.len(), 1);
    }
}
