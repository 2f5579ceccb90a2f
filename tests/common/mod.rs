#![allow(dead_code)]

pub mod command;
pub mod file;

/// Commit date pinned for every commit made through the helpers
pub const COMMIT_DATE: &str = "2023-01-01 12:00:00 +0000";

/// Name of the metadata directory created by `minigit init`
pub const METADATA_DIR: &str = ".minigit";
