//! Local document sources for HTML and Text input modes.

use bytes::Bytes;
use std::path::PathBuf;

use crate::errors::{WatsonError, WatsonResult};

/// A document supplied by the caller, resolved to UTF-8 text at request time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    /// A file on the local filesystem
    Path(PathBuf),
    /// In-memory text
    Text(String),
    /// In-memory bytes that must be valid UTF-8
    Bytes(Bytes),
}

impl Document {
    /// Document read from a file
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Document::Path(path.into())
    }

    /// Document held as text
    pub fn text(text: impl Into<String>) -> Self {
        Document::Text(text.into())
    }

    /// Document held as raw bytes
    pub fn bytes(bytes: impl Into<Bytes>) -> Self {
        Document::Bytes(bytes.into())
    }

    /// Resolve the document to text.
    ///
    /// # Errors
    ///
    /// Returns `Encoding` if the file cannot be read or the content is not
    /// valid UTF-8.
    pub fn read(&self) -> WatsonResult<String> {
        match self {
            Document::Path(path) => {
                let bytes = std::fs::read(path).map_err(|e| WatsonError::Encoding {
                    message: format!("Unable to read {}: {}", path.display(), e),
                })?;
                utf8(bytes)
            }
            Document::Text(text) => Ok(text.clone()),
            Document::Bytes(bytes) => utf8(bytes.to_vec()),
        }
    }
}

fn utf8(bytes: Vec<u8>) -> WatsonResult<String> {
    String::from_utf8(bytes).map_err(|e| WatsonError::Encoding {
        message: format!("Document is not valid UTF-8: {}", e.utf8_error()),
    })
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Document::Text(text.to_string())
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Document::Text(text)
    }
}

impl From<PathBuf> for Document {
    fn from(path: PathBuf) -> Self {
        Document::Path(path)
    }
}

impl From<Bytes> for Document {
    fn from(bytes: Bytes) -> Self {
        Document::Bytes(bytes)
    }
}
