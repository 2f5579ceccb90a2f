//! Data types and algorithms operating on the repository stores
//!
//! - `branch`: branch names and revision expressions
//! - `diff`: snapshot and line-level comparison
//! - `index`: staged entries
//! - `log`: history traversal
//! - `merge`: common ancestor search and three-way reconciliation
//! - `objects`: stored object types (blob, commit) and their ids

pub mod branch;
pub mod diff;
pub mod index;
pub mod log;
pub mod merge;
pub mod objects;
