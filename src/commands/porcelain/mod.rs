//! Porcelain commands (user-facing operations)
//!
//! Each command is an `impl Repository` block that mutates the in-memory
//! repository state and returns a structured result. Nothing is printed and
//! nothing but objects and working files is written until the caller saves.
//!
//! ## Commands
//!
//! - `init`: create a repository
//! - `add`: store files and stage them
//! - `commit`: snapshot the staged files
//! - `log`: walk the history
//! - `branch`: create and list branches
//! - `checkout`: restore a branch's files
//! - `merge`: three-way merge of a branch into HEAD
//! - `diff`: line-level comparison of two commits

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod diff;
pub mod init;
pub mod log;
pub mod merge;
