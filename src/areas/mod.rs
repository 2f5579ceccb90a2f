//! Stores a repository is made of
//!
//! - `database`: content-addressed object store for blobs and commits
//! - `index`: staged `(path, blob id)` entries waiting for the next commit
//! - `refs`: HEAD and branch pointer files
//! - `state`: the mutable part of a repository, loaded and saved as one value
//! - `workspace`: working directory file system operations
//! - `repository`: ties the stores together

pub mod database;
pub mod index;
pub(crate) mod refs;
pub mod repository;
pub mod state;
pub(crate) mod workspace;

use crate::errors::{Error, Result};
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;

/// Truncate `path` and write `content` while holding an exclusive lock
///
/// Used for every mutable metadata file: HEAD, branch refs and the index.
pub(crate) fn write_locked(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(Error::io(parent))?;
    }

    // open as WRONLY and CREAT, truncating the previous value
    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(Error::io(path))?;
    let mut lock = file_guard::lock(&mut file, Lock::Exclusive, 0, 1).map_err(Error::io(path))?;
    lock.deref_mut()
        .write_all(content)
        .map_err(Error::io(path))?;

    Ok(())
}
