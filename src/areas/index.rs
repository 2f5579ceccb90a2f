//! Index (staging area)
//!
//! The index is the ordered list of `(path, blob id)` pairs staged since the
//! last commit. It is append-only: staging a path twice keeps both entries,
//! and the commit resolves duplicates by letting the last staged entry win.
//!
//! ## Index File Format
//!
//! One entry per line, in staging order:
//!
//! ```text
//! <path> <blob-id>
//! ```
//!
//! The path is separated from the id by the last space on the line, so
//! paths may contain spaces.

use crate::areas::write_locked;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::commit::{parse_path_record, path_to_record};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Index {
    entries: Vec<IndexEntry>,
}

impl Index {
    pub fn new() -> Self {
        Index::default()
    }

    /// Append an entry; earlier entries for the same path are kept
    pub fn stage(&mut self, path: PathBuf, oid: ObjectId) {
        self.entries.push(IndexEntry::new(path, oid));
    }

    /// Take every staged entry, in staging order, leaving the index empty
    pub fn drain(&mut self) -> Vec<IndexEntry> {
        std::mem::take(&mut self.entries)
    }

    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry that would win at commit time for `path`
    pub fn entry_by_path(&self, path: &Path) -> Option<&IndexEntry> {
        self.entries.iter().rev().find(|entry| entry.name == path)
    }

    /// Load the index from disk
    ///
    /// A missing file is an empty index.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Index::new()),
            Err(err) => {
                return Err(Error::Io {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        let entries = content
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| {
                parse_path_record(line)
                    .map(|(name, oid)| IndexEntry::new(name, oid))
                    .ok_or_else(|| Error::InvalidIndexEntry(line.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Index { entries })
    }

    /// Replace the index file with the staged entries, under a file lock
    pub fn save(&self, path: &Path) -> Result<()> {
        write_locked(path, self.serialize()?.as_bytes())
    }

    pub fn serialize(&self) -> Result<String> {
        self.entries
            .iter()
            .map(|entry| Ok(format!("{} {}\n", path_to_record(&entry.name)?, entry.oid)))
            .collect()
    }
}
