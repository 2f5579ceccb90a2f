use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Snapshot;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use std::path::PathBuf;

/// What a checkout did to the working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutOutcome {
    pub head: ObjectId,
    /// Paths written from the target snapshot, in path order
    pub restored: Vec<PathBuf>,
    /// Paths tracked by the previous HEAD and absent from the target
    pub removed: Vec<PathBuf>,
    /// Stale paths left in place because their working content differs from
    /// the previous HEAD
    pub kept: Vec<PathBuf>,
}

impl Repository {
    /// Restore the working files of a branch and move HEAD to it
    ///
    /// Every blob of the target snapshot is loaded before any file is
    /// touched, so a missing object leaves the working directory as it was.
    /// Untracked files are never removed, and neither are stale files with
    /// uncommitted edits.
    #[tracing::instrument(skip(self))]
    pub fn checkout(&mut self, name: &str) -> Result<CheckoutOutcome> {
        let target = self
            .state()
            .branch(name)
            .cloned()
            .ok_or_else(|| Error::BranchNotFound(name.to_string()))?;

        let target_snapshot = self.database().load_commit(&target)?.into_snapshot();
        let contents = target_snapshot
            .iter()
            .map(|(path, blob_id)| Ok((path.clone(), self.database().load_blob(blob_id)?)))
            .collect::<Result<Vec<_>>>()?;

        let mut removed = Vec::new();
        let mut kept = Vec::new();
        for (path, blob_id) in self.head_snapshot() {
            if target_snapshot.contains_key(&path) {
                continue;
            }

            let content = match self.workspace().read_file(&path) {
                Ok(content) => content,
                Err(Error::FileNotFound(_)) => continue,
                Err(err) => return Err(err),
            };

            if ObjectId::hash(&content) == blob_id {
                removed.push(path);
            } else {
                tracing::warn!(path = %path.display(), "keeping locally modified file");
                kept.push(path);
            }
        }

        for path in &removed {
            self.workspace().remove_file(path)?;
            tracing::debug!(path = %path.display(), "removed stale file");
        }

        let mut restored = Vec::with_capacity(contents.len());
        for (path, blob) in contents {
            self.workspace().write_file(&path, blob.content())?;
            tracing::debug!(path = %path.display(), "restored file");
            restored.push(path);
        }

        self.state_mut().set_head(target.clone());
        tracing::info!(branch = name, head = %target, "checked out branch");

        Ok(CheckoutOutcome {
            head: target,
            restored,
            removed,
            kept,
        })
    }

    /// Snapshot of the current HEAD, empty when there is none to read
    fn head_snapshot(&self) -> Snapshot {
        let Some(head) = self.state().head() else {
            return Snapshot::new();
        };

        match self.database().load_commit(head) {
            Ok(commit) => commit.into_snapshot(),
            Err(err) => {
                tracing::warn!(%head, %err, "cannot read HEAD snapshot, no file will be removed");
                Snapshot::new()
            }
        }
    }
}
