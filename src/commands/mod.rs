//! Repository operations
//!
//! - `plumbing`: direct object access (hash-object, cat-file)
//! - `porcelain`: version-control workflows (add, commit, log, branch, ...)
//!
//! Plumbing commands provide building blocks, while porcelain commands compose
//! them into higher-level operations.

pub mod plumbing;
pub mod porcelain;
