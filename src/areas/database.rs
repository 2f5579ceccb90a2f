use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use bytes::Bytes;
use fake::rand;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

/// Content-addressed object store
///
/// Every object lives in its own file named by the hash of its bytes.
/// Writing is idempotent and nothing is ever deleted.
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Store raw bytes and return their key
    pub fn put(&self, content: &[u8]) -> Result<ObjectId> {
        let object_id = ObjectId::hash(content);
        let object_path = self.path.join(object_id.to_path());

        // identical content is already stored under the same name
        if object_path.exists() {
            tracing::trace!(%object_id, "object already stored");
            return Ok(object_id);
        }

        self.write_object(object_path, content)?;
        tracing::debug!(%object_id, size = content.len(), "stored object");

        Ok(object_id)
    }

    pub fn store(&self, object: &impl Object) -> Result<ObjectId> {
        self.put(&object.serialize()?)
    }

    pub fn get(&self, object_id: &ObjectId) -> Result<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        match std::fs::read(&object_path) {
            Ok(content) => Ok(content.into()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::ObjectNotFound(object_id.clone()))
            }
            Err(err) => Err(Error::Io {
                path: object_path,
                source: err,
            }),
        }
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).is_file()
    }

    pub fn load_blob(&self, object_id: &ObjectId) -> Result<Blob> {
        Ok(Blob::new(self.get(object_id)?))
    }

    pub fn load_commit(&self, object_id: &ObjectId) -> Result<Commit> {
        let content = self.get(object_id)?;

        Commit::deserialize(Cursor::new(content)).map_err(|err| {
            tracing::debug!(%object_id, %err, "object does not parse as a commit");
            Error::InvalidCommit(object_id.clone())
        })
    }

    pub fn store_commit(&self, commit: &Commit) -> Result<ObjectId> {
        self.store(commit)
    }

    fn write_object(&self, object_path: PathBuf, content: &[u8]) -> Result<()> {
        std::fs::create_dir_all(&self.path).map_err(Error::io(self.path.to_path_buf()))?;
        let temp_object_path = self.path.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)
            .map_err(Error::io(&temp_object_path))?;

        file.write_all(content)
            .map_err(Error::io(&temp_object_path))?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, &object_path).map_err(Error::io(&object_path))?;

        Ok(())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }

    /// Find all objects whose id starts with the given prefix.
    ///
    /// Used to resolve abbreviated ids. An empty result means no match, more
    /// than one result means the prefix is ambiguous.
    pub fn find_objects_by_prefix(&self, prefix: &str) -> Result<Vec<ObjectId>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let prefix = prefix.to_ascii_lowercase();
        let mut matches = std::fs::read_dir(&self.path)
            .map_err(Error::io(self.path.to_path_buf()))?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| name.starts_with(&prefix))
            .filter_map(|name| ObjectId::try_parse(name).ok())
            .collect::<Vec<_>>();
        matches.sort();

        Ok(matches)
    }
}
