use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use chrono::{DateTime, FixedOffset};
use std::collections::HashSet;

/// One commit as reported by `log`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub id: ObjectId,
    pub timestamp: DateTime<FixedOffset>,
    pub message: String,
    pub parent: Option<ObjectId>,
}

impl LogEntry {
    fn from_commit(id: ObjectId, commit: &Commit) -> Self {
        LogEntry {
            id,
            timestamp: commit.timestamp(),
            message: commit.message().to_string(),
            parent: commit.parent().cloned(),
        }
    }

    /// Human-readable timestamp, e.g. "Sun Jan 1 12:00:00 2023 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp.format("%a %b %-d %H:%M:%S %Y %z").to_string()
    }
}

/// Lazy walk from a commit to the root of its history, most recent first
///
/// The walk ends after the root commit, or silently at the first id that is
/// missing from the store or does not parse as a commit. Cloning a `RevList`
/// before iterating gives an independent walk from the same start.
#[derive(Debug, Clone)]
pub struct RevList<'r> {
    database: &'r Database,
    current_commit_oid: Option<ObjectId>,
}

impl<'r> RevList<'r> {
    pub fn new(database: &'r Database, start: Option<ObjectId>) -> Self {
        RevList {
            database,
            current_commit_oid: start,
        }
    }

    /// Ids of every commit reachable from the start, the start included
    pub fn ancestors(self) -> HashSet<ObjectId> {
        self.map(|entry| entry.id).collect()
    }
}

impl Iterator for RevList<'_> {
    type Item = LogEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let commit_oid = self.current_commit_oid.take()?;

        match self.database.load_commit(&commit_oid) {
            Ok(commit) => {
                // move to the parent commit for the next iteration
                self.current_commit_oid = commit.parent().cloned();
                Some(LogEntry::from_commit(commit_oid, &commit))
            }
            Err(err) => {
                tracing::debug!(%commit_oid, %err, "history walk stopped");
                None
            }
        }
    }
}
