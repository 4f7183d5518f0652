// pre-defined test scenarios

use super::tree_builder::{TestChangelogEntry, TestTree, TestTreeBuilder};

pub const COPYRIGHT_TEMPLATE: &str = "\
Upstream Authors:

%AUTHORS%

Copyright:

  Copyright (C) 2008-2016 Nicira, Inc.
";

/// authors list whose names start at line 5
pub const AUTHORS: &str = "\
Open vSwitch Authors
====================

The following people authored or signed off on commits:
Alice Example         alice@example.org
Bob Example           bob@example.org

The following additional people are mentioned in commit logs:
Carol Example
";

pub const AUTHORS_START_LINE: usize = 5;

/// pre-defined test scenarios
pub enum TestScenario {
    /// release 2.4.0 with every packaging file in place
    Release,
    /// pre-release 2.5.pre1 recorded as 2.5.~pre1-1
    PreRelease,
    /// changelog that only knows about 2.4.0
    OutdatedChangelog,
    /// template without the authors placeholder
    MissingPlaceholder,
}

impl TestScenario {
    /// build a source tree from a predefined scenario
    pub fn build(self) -> Result<TestTree, Box<dyn std::error::Error>> {
        match self {
            TestScenario::Release => Self::base()
                .changelog_entry(TestChangelogEntry::new("2.4.0-1"))
                .build(),
            TestScenario::PreRelease => Self::base()
                .changelog_entry(
                    TestChangelogEntry::new("2.5.~pre1-1").change("Pre-release snapshot."),
                )
                .changelog_entry(TestChangelogEntry::new("2.4.0-1"))
                .build(),
            TestScenario::OutdatedChangelog => Self::base()
                .changelog_entry(TestChangelogEntry::new("2.4.0-1"))
                .build(),
            TestScenario::MissingPlaceholder => Self::base()
                .changelog_entry(TestChangelogEntry::new("2.4.0-1"))
                .file("debian/copyright.in", "Upstream Authors: see AUTHORS.rst\n")
                .build(),
        }
    }

    fn base() -> TestTreeBuilder {
        TestTreeBuilder::new()
            .file("debian/copyright.in", COPYRIGHT_TEMPLATE)
            .file("AUTHORS.rst", AUTHORS)
            .file("debian/control", "Source: openvswitch\n")
            .file("debian/rules", "#!/usr/bin/make -f\n")
            .config(format!(
                "[copyright]\nstart_line = {}\n\n[dist]\nfiles = [\"debian/changelog\", \"debian/control\", \"debian/rules\", \"debian/copyright.in\"]\n",
                AUTHORS_START_LINE
            ))
    }
}
