//! Commit-to-commit comparison
//!
//! - `snapshot_diff`: which paths were added, deleted or modified between
//!   two snapshots
//! - `line_diff`: positional, line-by-line comparison of two file versions
//!
//! The line comparison is index-aligned, not a minimal edit script: line `i`
//! of the old version is compared with line `i` of the new one.

pub mod line_diff;
pub mod snapshot_diff;
