// source distribution file list

pub mod manifest;

pub use manifest::{DistManifest, DistReport};
