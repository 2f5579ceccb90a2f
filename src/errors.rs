use crate::artifacts::objects::object_id::ObjectId;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures reported by repository operations
///
/// Merge conflicts are not errors; they are collected in the merge outcome.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("not a minigit repository: {0}")]
    NotARepository(PathBuf),

    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("object not found: {0}")]
    ObjectNotFound(ObjectId),

    #[error("branch not found: {0}")]
    BranchNotFound(String),

    #[error("no commit yet: HEAD is empty")]
    NoCommitYet,

    #[error("no common ancestor between HEAD and the target branch")]
    NoCommonAncestor,

    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("invalid object id: {0}")]
    InvalidObjectId(String),

    #[error("invalid revision: {0}")]
    InvalidRevision(String),

    #[error("short object id {prefix} is ambiguous ({} candidates)", .candidates.len())]
    AmbiguousRevision {
        prefix: String,
        candidates: Vec<ObjectId>,
    },

    #[error("object {0} is not a valid commit")]
    InvalidCommit(ObjectId),

    #[error("invalid index entry: {0:?}")]
    InvalidIndexEntry(String),

    #[error("commit message must be a single non-empty line")]
    InvalidCommitMessage,

    #[error("path cannot be tracked: {0}")]
    InvalidPath(PathBuf),

    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Error::Io { path, source }
    }
}
