// testing utilities for generating packaging source trees

pub mod scenarios;
pub mod tree_builder;

pub use scenarios::TestScenario;
pub use tree_builder::{TestChangelogEntry, TestTree, TestTreeBuilder};
