//! Three-way merge
//!
//! - `lca_finder`: lowest common ancestor of two commits on a parent chain
//! - `reconcile`: per-path classification against the common ancestor

pub mod lca_finder;
pub mod reconcile;
