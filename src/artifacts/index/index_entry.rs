use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use std::path::PathBuf;

/// A staged file
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct IndexEntry {
    /// File path relative to the repository root
    pub name: PathBuf,
    /// Id of the blob holding the staged content
    pub oid: ObjectId,
}
