use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::{Commit, Snapshot};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};

impl Repository {
    /// Record the staged entries on top of HEAD's snapshot and move HEAD
    ///
    /// When a path was staged more than once, the last staged entry wins.
    /// An empty index is allowed: the commit then repeats its parent's
    /// snapshot. Branch pointers are not advanced.
    #[tracing::instrument(skip(self))]
    pub fn commit(&mut self, message: &str) -> Result<ObjectId> {
        let message = message.trim();
        if message.is_empty() || message.contains(['\n', '\r']) {
            return Err(Error::InvalidCommitMessage);
        }

        let parent = self.state().head().cloned();
        let mut snapshot = match &parent {
            Some(parent) => self.database().load_commit(parent)?.into_snapshot(),
            None => Snapshot::new(),
        };

        for entry in self.state().index().entries() {
            snapshot.insert(entry.name.clone(), entry.oid.clone());
        }

        let timestamp = self.config().commit_timestamp();
        let commit = Commit::new(timestamp, message.to_string(), parent, snapshot);
        let commit_id = self.database().store_commit(&commit)?;

        // the object is stored before HEAD moves
        self.state_mut().index_mut().drain();
        self.state_mut().set_head(commit_id.clone());

        tracing::info!(
            %commit_id,
            parent = ?commit.parent(),
            files = commit.snapshot().len(),
            "created commit"
        );

        Ok(commit_id)
    }
}
