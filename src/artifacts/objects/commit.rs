//! Commit object
//!
//! A commit records a full snapshot of the tracked files together with a
//! timestamp, a one-line message and at most one parent.
//!
//! ## Format
//!
//! ```text
//! <timestamp>|<message>
//! <parent-id or empty>
//! <path> <blob-id>
//! <path> <blob-id>
//! ...
//! ```
//!
//! Snapshot lines are written in ascending path order so that the same
//! commit always serializes to the same bytes. The timestamp is part of the
//! hashed content: committing the same snapshot twice yields two ids.

use crate::artifacts::objects::object::{Object, ObjectParseError, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::config::TIMESTAMP_FORMAT;
use crate::errors::{Error, Result};
use bytes::Bytes;
use chrono::{DateTime, FixedOffset};
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Tracked files of a commit, by path
pub type Snapshot = BTreeMap<PathBuf, ObjectId>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    timestamp: DateTime<FixedOffset>,
    message: String,
    parent: Option<ObjectId>,
    snapshot: Snapshot,
}

impl Commit {
    pub fn new(
        timestamp: DateTime<FixedOffset>,
        message: String,
        parent: Option<ObjectId>,
        snapshot: Snapshot,
    ) -> Self {
        Commit {
            timestamp,
            message,
            parent,
            snapshot,
        }
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn into_snapshot(self) -> Snapshot {
        self.snapshot
    }

    fn header(&self) -> String {
        format!(
            "{}|{}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.message
        )
    }
}

/// Slash-separated form of a tracked path, as written in commits and the index
pub(crate) fn path_to_record(path: &Path) -> Result<String> {
    let text = path
        .to_str()
        .ok_or_else(|| Error::InvalidPath(path.to_path_buf()))?;

    if text.is_empty() || text.contains(['\n', '\r']) {
        return Err(Error::InvalidPath(path.to_path_buf()));
    }

    Ok(text.replace(std::path::MAIN_SEPARATOR, "/"))
}

/// Split a `<path> <blob-id>` record on its last space
pub(crate) fn parse_path_record(line: &str) -> Option<(PathBuf, ObjectId)> {
    let (path, oid) = line.rsplit_once(' ')?;
    if path.is_empty() {
        return None;
    }

    let oid = ObjectId::try_parse(oid.to_string()).ok()?;
    Some((PathBuf::from(path), oid))
}

impl Packable for Commit {
    fn serialize(&self) -> Result<Bytes> {
        let mut content = String::new();

        content.push_str(&self.header());
        content.push('\n');
        if let Some(parent) = &self.parent {
            content.push_str(parent.as_ref());
        }
        content.push('\n');

        for (path, oid) in &self.snapshot {
            content.push_str(&format!("{} {}\n", path_to_record(path)?, oid));
        }

        Ok(Bytes::from(content))
    }
}

impl Unpackable for Commit {
    fn deserialize(mut reader: impl BufRead) -> std::result::Result<Self, ObjectParseError> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|err| ObjectParseError(err.to_string()))?;

        let mut lines = content.split('\n');

        let header = lines
            .next()
            .ok_or_else(|| ObjectParseError("missing header line".into()))?;
        let (timestamp, message) = header
            .split_once('|')
            .ok_or_else(|| ObjectParseError("header is not <timestamp>|<message>".into()))?;
        let timestamp = DateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
            .map_err(|err| ObjectParseError(format!("invalid timestamp: {err}")))?;

        let parent = lines
            .next()
            .ok_or_else(|| ObjectParseError("missing parent line".into()))?;
        let parent = match parent {
            "" => None,
            oid => Some(
                ObjectId::try_parse(oid.to_string())
                    .map_err(|_| ObjectParseError(format!("invalid parent id {oid:?}")))?,
            ),
        };

        let snapshot = lines
            .filter(|line| !line.is_empty())
            .map(|line| {
                parse_path_record(line)
                    .ok_or_else(|| ObjectParseError(format!("invalid snapshot line {line:?}")))
            })
            .collect::<std::result::Result<Snapshot, _>>()?;

        Ok(Commit::new(timestamp, message.to_string(), parent, snapshot))
    }
}

impl Object for Commit {}
