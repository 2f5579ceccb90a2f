//! Object identifier (SHA-256 hash)
//!
//! Object IDs are 64-character lowercase hexadecimal strings. They name both
//! file blobs and commits.
//!
//! ## Format
//!
//! - Full: 64 hex characters
//! - Short: first 7 characters, accepted back as a revision when unambiguous
//!
//! ## Storage
//!
//! Objects are stored flat, in `.minigit/objects/<id>`

use crate::artifacts::objects::{OBJECT_ID_LENGTH, SHORT_OBJECT_ID_LENGTH};
use crate::errors::{Error, Result};
use sha2::{Digest, Sha256};
use std::path::PathBuf;

/// Content-derived object identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID
    ///
    /// # Arguments
    ///
    /// * `id` - 64-character hexadecimal string
    pub fn try_parse(id: String) -> Result<Self> {
        if id.len() != OBJECT_ID_LENGTH || !Self::is_hex(&id) {
            return Err(Error::InvalidObjectId(id));
        }

        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Hash raw bytes into their object ID
    pub fn hash(content: &[u8]) -> Self {
        let digest = Sha256::digest(content);
        Self(format!("{digest:x}"))
    }

    pub fn is_hex(text: &str) -> bool {
        !text.is_empty() && text.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// File name of the object inside the objects directory
    pub fn to_path(&self) -> PathBuf {
        PathBuf::from(&self.0)
    }

    pub fn to_short_oid(&self) -> String {
        self.0[..SHORT_OBJECT_ID_LENGTH].to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ObjectId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn hash_matches_known_sha256() {
        let oid = ObjectId::hash(b"hello");

        assert_eq!(
            oid.as_ref(),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
        assert_eq!(oid.to_short_oid(), "2cf24db");
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("zz24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824")]
    #[case("2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b98240")]
    fn malformed_ids_are_rejected(#[case] raw: &str) {
        assert!(matches!(
            ObjectId::try_parse(raw.to_string()),
            Err(Error::InvalidObjectId(_))
        ));
    }

    proptest! {
        #[test]
        fn short_form_is_a_prefix_of_any_hashed_id(content in proptest::collection::vec(any::<u8>(), 0..64)) {
            let oid = ObjectId::hash(&content);

            prop_assert_eq!(oid.as_ref().len(), OBJECT_ID_LENGTH);
            prop_assert!(oid.as_ref().starts_with(&oid.to_short_oid()));
        }
    }

    #[test]
    fn uppercase_ids_are_normalised() {
        let upper = "2CF24DBA5FB0A30E26E83B2AC5B9E29E1B161E5C1FA7425E73043362938B9824";
        let oid = ObjectId::try_parse(upper.to_string()).expect("valid id");

        assert_eq!(oid, ObjectId::hash(b"hello"));
    }
}
