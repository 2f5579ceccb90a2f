use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use std::path::Path;

impl Repository {
    /// Object id a working file would be stored under
    ///
    /// With `write` the content is also stored.
    pub fn hash_object(&self, path: &Path, write: bool) -> Result<ObjectId> {
        let relative = self.workspace().normalize(path)?;
        let content = self.workspace().read_file(&relative)?;

        if write {
            self.database().put(&content)
        } else {
            Ok(ObjectId::hash(&content))
        }
    }
}
