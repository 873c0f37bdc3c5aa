//! Custom error types for the dict-export crate.

use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The export target exists but is a file (or another non-directory).
    #[error("The target must be a directory, not a file: {}", .0.display())]
    InvalidTarget(PathBuf),

    /// An error originating from artifact creation, writes, flushes or media copies.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The requested artifact text encoding is not a known WHATWG label.
    #[error("Unknown text encoding label: {0}")]
    UnknownEncoding(String),

    /// A record or flush call was made outside an open export session.
    #[error("Writer is not accepting output: {0}")]
    InvalidState(&'static str),
}

/// A convenience `Result` type alias using the crate's `ExportError` type.
pub type Result<T> = std::result::Result<T, ExportError>;
