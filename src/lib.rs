//! A minimal content-addressed version-control engine
//!
//! The crate is organised the same way the on-disk repository is:
//!
//! - `areas`: the stores a repository is made of (object database, index,
//!   refs, working directory) and the `Repository` that ties them together
//! - `artifacts`: the data types and algorithms operating on those stores
//!   (objects, branch names and revisions, history walks, merge, diff)
//! - `commands`: the operations exposed to callers, written as `impl Repository`
//!   blocks returning structured results
//!
//! Persistence happens at explicit edges: [`Repository::open`] loads HEAD, the
//! index and the branch pointers, and [`Repository::save`] writes them back.
//! The object database is append-only and is written through immediately.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod errors;

pub use areas::repository::Repository;
pub use config::Config;
pub use errors::{Error, Result};

/// Name of the metadata directory created at the repository root
pub const METADATA_DIR: &str = ".minigit";

/// Output format for `log`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitDisplayFormat {
    #[default]
    Medium,
    OneLine,
}
