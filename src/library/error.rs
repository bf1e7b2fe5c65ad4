//! Library-level error types
//!
//! Validation failures are distinct variants so a host can show a specific
//! rejection message. None of them mutate any state.

use thiserror::Error;

/// Errors from library operations
#[derive(Debug, Error)]
pub enum LibraryError {
    /// Catalog could not be read or written
    #[error("Catalog error: {0}")]
    Catalog(#[from] crate::catalog::CatalogError),

    /// Upload storage failed
    #[error("Storage error: {0}")]
    Storage(#[from] crate::storage::StorageError),

    /// Title is empty after trimming
    #[error("Title is required")]
    MissingTitle,

    /// Tag text yields no non-empty tag
    #[error("At least one tag is required")]
    MissingTags,

    /// Upload is neither an accepted image nor an accepted video
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// Stored files already fill the quota
    #[error("Storage limit of {limit} bytes reached")]
    QuotaReached { limit: u64 },

    /// Upload does not fit in the remaining quota
    #[error("File too large: {requested} bytes requested, {available} bytes available")]
    QuotaExceeded { requested: u64, available: u64 },

    /// No item with this id
    #[error("Item not found: {0}")]
    ItemNotFound(u64),
}

impl LibraryError {
    /// True for rejections caused by the caller's input rather than by storage
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingTitle
                | Self::MissingTags
                | Self::UnsupportedMediaType(_)
                | Self::QuotaReached { .. }
                | Self::QuotaExceeded { .. }
        )
    }
}
