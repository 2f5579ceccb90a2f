use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use bytes::Bytes;
use std::io::BufRead;

/// Content that does not follow the expected object layout
#[derive(Debug, thiserror::Error)]
#[error("malformed object: {0}")]
pub struct ObjectParseError(pub String);

pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> std::result::Result<Self, ObjectParseError>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_id(&self) -> Result<ObjectId> {
        let content = self.serialize()?;
        Ok(ObjectId::hash(&content))
    }
}
