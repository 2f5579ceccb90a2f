//! Mutable repository state
//!
//! HEAD, the staged index entries and the branch pointers form the only
//! mutable part of a repository. They are loaded into a `RepositoryState`
//! when the repository is opened and written back by an explicit save, so
//! operations work on a plain value instead of reaching for files.

use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryState {
    head: Option<ObjectId>,
    index: Index,
    branches: BTreeMap<BranchName, ObjectId>,
}

impl RepositoryState {
    pub fn load(refs: &Refs, index_path: &Path) -> Result<Self> {
        Ok(RepositoryState {
            head: refs.read_head()?,
            index: Index::load(index_path)?,
            branches: refs.read_branches()?,
        })
    }

    pub fn save(&self, refs: &Refs, index_path: &Path) -> Result<()> {
        refs.write_head(self.head.as_ref())?;

        for (name, oid) in &self.branches {
            refs.write_branch(name, oid)?;
        }

        self.index.save(index_path)?;

        Ok(())
    }

    pub fn head(&self) -> Option<&ObjectId> {
        self.head.as_ref()
    }

    pub fn set_head(&mut self, oid: ObjectId) {
        self.head = Some(oid);
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn index_mut(&mut self) -> &mut Index {
        &mut self.index
    }

    pub fn branch(&self, name: &str) -> Option<&ObjectId> {
        self.branches
            .iter()
            .find(|(branch, _)| branch.as_ref() == name)
            .map(|(_, oid)| oid)
    }

    pub fn branches(&self) -> &BTreeMap<BranchName, ObjectId> {
        &self.branches
    }

    /// Point `name` at `oid`, replacing any previous target
    pub fn set_branch(&mut self, name: BranchName, oid: ObjectId) -> Option<ObjectId> {
        self.branches.insert(name, oid)
    }
}
