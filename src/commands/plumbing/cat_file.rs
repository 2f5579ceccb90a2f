use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::errors::Result;
use bytes::Bytes;

impl Repository {
    /// Raw stored bytes of an object
    ///
    /// `key` is a full or abbreviated object id, or any revision naming a
    /// commit.
    pub fn cat_object(&self, key: &str) -> Result<Bytes> {
        let oid = Revision::try_parse(key)?.resolve_object(self)?;

        self.database().get(&oid)
    }
}
