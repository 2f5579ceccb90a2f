//! Commit history traversal
//!
//! History is a single parent chain: every commit names at most one parent,
//! so walking from any commit to the root is a plain linked-list walk.
//!
//! - `rev_list`: lazy walk from a starting commit through its parents

pub mod rev_list;
