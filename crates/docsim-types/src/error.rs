use std::io;
use std::path::PathBuf;

/// Errors produced while loading or parsing a document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The document file could not be read.
    #[error("failed to read document {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document file held malformed JSON.
    #[error("failed to parse document {path:?}: {source}")]
    ParseFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Malformed JSON from an in-memory source.
    #[error("failed to parse document: {0}")]
    Parse(#[from] serde_json::Error),
}
