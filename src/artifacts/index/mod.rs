//! Index data structures
//!
//! An index entry pairs a repository-relative path with the id of the blob
//! holding the content that was staged for it.

pub mod index_entry;
