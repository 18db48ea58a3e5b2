//! Document loading: parse JSON text into the [`DocValue`] model.
//!
//! Loading happens entirely before comparison; any failure here surfaces as
//! a [`DocumentError`] and the diff engine never runs.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::DocumentError;
use crate::value::DocValue;

/// Parse a document from JSON text.
pub fn from_json_str(text: &str) -> Result<DocValue, DocumentError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    Ok(value.into())
}

/// Parse a document from a byte stream.
pub fn from_reader<R: Read>(reader: R) -> Result<DocValue, DocumentError> {
    let value: serde_json::Value = serde_json::from_reader(reader)?;
    Ok(value.into())
}

/// Read and parse a document from a file on disk.
///
/// Errors carry the offending path so callers can report which of the two
/// input documents failed.
pub fn read_document(path: impl AsRef<Path>) -> Result<DocValue, DocumentError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value: serde_json::Value =
        serde_json::from_str(&text).map_err(|source| DocumentError::ParseFile {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(value.into())
}
