use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::diff::line_diff::{LineChange, positional_diff};
use crate::artifacts::diff::snapshot_diff::{SnapshotChange, snapshot_diff};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileChange {
    Added,
    Deleted,
    /// Positions where the lines differ; empty when the blobs differ only in
    /// ways line splitting does not see, such as a trailing newline
    Modified(Vec<LineChange>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub path: PathBuf,
    pub change: FileChange,
}

/// Differences between two commits, in path order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffReport {
    pub old: ObjectId,
    pub new: ObjectId,
    pub files: Vec<FileDiff>,
}

impl DiffReport {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl Repository {
    /// Compare the snapshots of two revisions
    ///
    /// Paths holding the same blob on both sides are left out, so comparing a
    /// commit with itself yields an empty report.
    pub fn diff(&self, old: &str, new: &str) -> Result<DiffReport> {
        let old = Revision::try_parse(old)?.resolve(self)?;
        let new = Revision::try_parse(new)?.resolve(self)?;

        let old_snapshot = self.database().load_commit(&old)?.into_snapshot();
        let new_snapshot = self.database().load_commit(&new)?.into_snapshot();

        let files = snapshot_diff(&old_snapshot, &new_snapshot)
            .into_iter()
            .map(|(path, change)| {
                let change = match change {
                    SnapshotChange::Added(_) => FileChange::Added,
                    SnapshotChange::Deleted(_) => FileChange::Deleted,
                    SnapshotChange::Modified { old, new } => {
                        let old_lines = self.database().load_blob(&old)?.lines();
                        let new_lines = self.database().load_blob(&new)?.lines();
                        FileChange::Modified(positional_diff(&old_lines, &new_lines))
                    }
                };

                Ok(FileDiff { path, change })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(%old, %new, files = files.len(), "computed diff");

        Ok(DiffReport { old, new, files })
    }
}
