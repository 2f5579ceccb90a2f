//! Plumbing commands (low-level object access)
//!
//! - `hash_object`: compute, and optionally store, the id of a file
//! - `cat_file`: read the raw bytes of a stored object

pub mod cat_file;
pub mod hash_object;
