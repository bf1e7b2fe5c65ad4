//! Storage-specific error types
//!
//! Errors raised by the upload directory: writing, measuring and exporting
//! stored media files.

use thiserror::Error;

/// Upload storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Represents an I/O error inside the upload directory
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Upload name has no usable file name component
    #[error("Invalid file name: '{0}'")]
    InvalidName(String),

    /// A file is already stored under this key
    #[error("Storage key already in use: {0}")]
    KeyTaken(String),

    /// Stored file is missing from the upload directory
    #[error("Stored file not found: {0}")]
    FileNotFound(String),

    /// Upload directory path is not valid UTF-8 and cannot be scanned
    #[error("Error while reading path {0}")]
    PathError(String),

    /// Invalid scan pattern
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}
