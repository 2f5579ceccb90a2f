//! File content blob
//!
//! A blob is the stored form of one version of a file: the bytes and nothing
//! else. Path and history live in commits.
//!
//! ## Format
//!
//! On disk: the raw content, no header

use crate::artifacts::objects::object::{Object, ObjectParseError, Packable, Unpackable};
use crate::errors::Result;
use bytes::Bytes;
use derive_new::new;
use std::io::BufRead;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    pub fn content(&self) -> &Bytes {
        &self.content
    }

    /// Content split on `\n`, decoded lossily
    ///
    /// A carriage return stays part of its line. The empty segment after a
    /// final newline is not a line.
    pub fn lines(&self) -> Vec<String> {
        let text = String::from_utf8_lossy(&self.content);
        let mut lines = text.split('\n').map(str::to_string).collect::<Vec<_>>();

        if lines.last().is_some_and(String::is_empty) {
            lines.pop();
        }

        lines
    }
}

impl Packable for Blob {
    fn serialize(&self) -> Result<Bytes> {
        Ok(self.content.clone())
    }
}

impl Unpackable for Blob {
    fn deserialize(mut reader: impl BufRead) -> std::result::Result<Self, ObjectParseError> {
        let mut content = Vec::new();
        reader
            .read_to_end(&mut content)
            .map_err(|err| ObjectParseError(err.to_string()))?;

        Ok(Self::new(content.into()))
    }
}

impl Object for Blob {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::diff::line_diff::{LineChange, positional_diff};
    use crate::artifacts::objects::object_id::ObjectId;
    use rstest::rstest;

    #[test]
    fn blob_id_is_hash_of_raw_content() {
        let blob = Blob::new(Bytes::from_static(b"hello"));

        assert_eq!(blob.object_id().unwrap(), ObjectId::hash(b"hello"));
    }

    #[rstest]
    #[case(b"", &[])]
    #[case(b"one", &["one"])]
    #[case(b"one\ntwo\n", &["one", "two"])]
    #[case(b"one\n\n", &["one", ""])]
    #[case(b"one\ntwo\r\nthree\n", &["one", "two\r", "three"])]
    fn lines_keep_carriage_returns(#[case] content: &'static [u8], #[case] expected: &[&str]) {
        let blob = Blob::new(Bytes::from_static(content));

        assert_eq!(blob.lines(), expected);
    }

    #[test]
    fn crlf_only_edit_changes_the_line() {
        let old = Blob::new(Bytes::from_static(b"a\n"));
        let new = Blob::new(Bytes::from_static(b"a\r\n"));

        let changes = positional_diff(&old.lines(), &new.lines());

        assert_eq!(
            changes,
            vec![LineChange { line: 1, removed: Some("a".into()), added: Some("a\r".into()) }]
        );
    }
}
