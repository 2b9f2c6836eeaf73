//! Content digest over the leaf text of a notice.
//!
//! The input is the concatenation of every leaf text in schema order, from
//! the header up to the end of `arquivoA560`, encoded as ISO-8859-1. Tag names,
//! indentation and the postal stamp take no part in it.

use std::convert::Infallible;

use encoding_rs::WINDOWS_1252;
use md5::{Digest, Md5};

use crate::document::{A560Document, DocumentVisitor};
use crate::error::DocumentError;

/// Collects leaf text in visit order.
#[derive(Debug, Default)]
pub struct LeafText {
    text: String,
}

impl LeafText {
    pub fn into_string(self) -> String {
        self.text
    }
}

impl DocumentVisitor for LeafText {
    type Error = Infallible;

    fn open(&mut self, _tag: &'static str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn leaf(&mut self, _tag: &'static str, text: &str) -> Result<(), Self::Error> {
        self.text.push_str(text);
        Ok(())
    }

    fn close(&mut self, _tag: &'static str) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// The exact text the digest is computed over.
pub fn hashed_text(document: &A560Document) -> String {
    let mut collector = LeafText::default();
    match document.accept_hashed(&mut collector) {
        Ok(()) => collector.into_string(),
        Err(never) => match never {},
    }
}

/// Recompute the digest of `document`'s hashed content.
pub fn content_digest(document: &A560Document) -> Result<String, DocumentError> {
    digest_text(&hashed_text(document))
}

/// Lowercase hex MD5 of `text` encoded as ISO-8859-1.
pub fn digest_text(text: &str) -> Result<String, DocumentError> {
    let bytes = encode_latin1(text)?;
    Ok(hex::encode(Md5::digest(&bytes)))
}

/// Encode to the single-byte Latin charset used for artifacts and digests.
///
/// `encoding_rs` serves the `ISO-8859-1` label with windows-1252, which agrees
/// with ISO-8859-1 everywhere outside 0x80..=0x9F. Sanitized leaves are plain
/// ASCII, so the difference never shows in practice.
pub fn encode_latin1(text: &str) -> Result<Vec<u8>, DocumentError> {
    let (bytes, _, had_errors) = WINDOWS_1252.encode(text);
    if had_errors {
        return Err(DocumentError::Encoding {
            text: text.to_string(),
        });
    }
    Ok(bytes.into_owned())
}

/// True when the stored digest matches the document content.
pub fn verify_digest(document: &A560Document) -> Result<bool, DocumentError> {
    Ok(content_digest(document)? == document.hash())
}
