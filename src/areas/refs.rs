//! HEAD and branch pointers on disk
//!
//! ## File Format
//!
//! - `HEAD`: a single commit id, or empty in a repository without commits
//! - `refs/<branch>`: the commit id the branch points to
//!
//! HEAD is not symbolic: it always holds an id, and branches are only
//! written when they are created.

use crate::areas::write_locked;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use derive_new::new;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Name of the HEAD file
pub const HEAD_FILE_NAME: &str = "HEAD";

/// Name of the directory holding one file per branch
pub const REFS_DIR_NAME: &str = "refs";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the metadata directory (typically `.minigit`)
    path: Box<Path>,
}

impl Refs {
    pub fn head_path(&self) -> PathBuf {
        self.path.join(HEAD_FILE_NAME)
    }

    pub fn refs_path(&self) -> PathBuf {
        self.path.join(REFS_DIR_NAME)
    }

    pub fn read_head(&self) -> Result<Option<ObjectId>> {
        Self::read_ref_file(&self.head_path())
    }

    pub fn write_head(&self, oid: Option<&ObjectId>) -> Result<()> {
        let content = oid.map(|oid| oid.to_string()).unwrap_or_default();
        Self::update_ref_file(&self.head_path(), &content)
    }

    pub fn write_branch(&self, name: &BranchName, oid: &ObjectId) -> Result<()> {
        Self::update_ref_file(&self.refs_path().join(name.as_ref()), oid.as_ref())
    }

    /// Every branch pointer under `refs/`
    ///
    /// Files whose name is not a valid branch name are skipped.
    pub fn read_branches(&self) -> Result<BTreeMap<BranchName, ObjectId>> {
        let refs_path = self.refs_path();
        if !refs_path.exists() {
            return Ok(BTreeMap::new());
        }

        let mut branches = BTreeMap::new();
        for entry in std::fs::read_dir(&refs_path).map_err(Error::io(&refs_path))? {
            let entry = entry.map_err(Error::io(&refs_path))?;
            let Some(name) = entry
                .file_name()
                .into_string()
                .ok()
                .and_then(|name| BranchName::try_parse(name).ok())
            else {
                tracing::warn!(path = ?entry.path(), "skipping unrecognised ref file");
                continue;
            };

            if let Some(oid) = Self::read_ref_file(&entry.path())? {
                branches.insert(name, oid);
            }
        }

        Ok(branches)
    }

    fn read_ref_file(path: &Path) -> Result<Option<ObjectId>> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(Error::Io {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match content.trim() {
            "" => Ok(None),
            oid => Ok(Some(ObjectId::try_parse(oid.to_string())?)),
        }
    }

    fn update_ref_file(path: &Path, content: &str) -> Result<()> {
        write_locked(path, content.as_bytes())
    }
}
