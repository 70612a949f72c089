//! Error types for the paint engine.

use std::fmt;
use std::io;

/// Result type alias for paint engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for paint engine operations.
///
/// Out-of-bounds drawing coordinates are deliberately *not* an error: pointer
/// positions derived from terminal input can transiently leave the canvas, so
/// the grid clips them silently.
#[derive(Debug)]
pub enum Error {
    /// I/O error while reading or writing a document file.
    Io(io::Error),
    /// Canvas dimension error (zero width/height).
    InvalidDimensions { width: u32, height: u32 },
    /// A document file could not be parsed.
    MalformedDocument(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid canvas dimensions: {width}x{height}")
            }
            Self::MalformedDocument(msg) => write!(f, "malformed document: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::MalformedDocument(e.to_string())
    }
}
