//! Stored object types
//!
//! Everything in the object database is a plain byte sequence named by the
//! SHA-256 of those bytes. Two kinds of content are stored:
//!
//! - **Blob**: raw file content
//! - **Commit**: a text record with timestamp, message, optional parent and
//!   the snapshot of tracked files
//!
//! Both share the same key space; a commit is just a blob whose bytes parse
//! as a commit record.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;

/// Length of a SHA-256 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 64;

/// Length of the abbreviated form shown to users
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;
