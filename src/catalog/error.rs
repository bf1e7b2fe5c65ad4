//! Catalog-specific error types
//!
//! This module defines all error types that can occur while reading or
//! writing the catalog file.
//!
//! # Error Types
//!
//! - **`Io`**: The catalog file or its directory could not be read or written
//! - **`Corrupt`**: The catalog file exists but is not a valid item array
//! - **`Encode`**: The item collection could not be serialized
//!
//! A missing catalog file is not an error: it reads as an empty catalog.

use std::path::PathBuf;
use thiserror::Error;

/// Catalog-specific errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Represents an I/O error on the catalog file
    #[error("Catalog I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file could not be parsed
    #[error("Catalog file {} is corrupt: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The item collection could not be serialized
    #[error("Error while encoding catalog: {0}")]
    Encode(#[source] serde_json::Error),

    /// The catalog path has no parent directory to write into
    #[error("Invalid catalog path: {0}")]
    InvalidPath(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
