//! Testing utilities for mediacat
//!
//! This module provides helper types and functions for writing tests,
//! including a `TestLibrary` wrapper for temporary library management.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{Catalog, Item, MediaKind};
use crate::library::{Library, Upload};
use crate::storage::{MediaStore, Quota};
use std::path::Path;
use tempfile::TempDir;

/// Wrapper for a temporary library that cleans up on drop
///
/// The catalog and the upload directory both live inside one temporary
/// directory, which is removed when the wrapper goes out of scope.
pub struct TestLibrary {
    dir: TempDir,
    library: Library,
}

impl TestLibrary {
    /// Create a library with the default 200 MiB quota
    ///
    /// # Panics
    /// Panics if the temporary directory or library cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self::with_quota(Quota::default().limit())
    }

    /// Create a library with a custom quota in bytes
    ///
    /// # Panics
    /// Panics if the temporary directory or library cannot be created.
    #[must_use]
    pub fn with_quota(limit: u64) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let catalog = Catalog::open(dir.path().join("database").join("metadata.json"))
            .expect("Failed to open test catalog");
        let store = MediaStore::open(dir.path().join("uploads")).expect("Failed to open test store");

        Self {
            library: Library::new(catalog, store, Quota::new(limit)),
            dir,
        }
    }

    /// Get a reference to the underlying library
    #[must_use]
    pub const fn library(&self) -> &Library {
        &self.library
    }

    /// Root of the temporary directory
    #[must_use]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Add an item backed by a file of `size` zero bytes
    ///
    /// # Panics
    /// Panics if the add is rejected.
    pub fn add(&self, title: &str, tags: &str, file_name: &str, size: usize) -> Item {
        self.library
            .add_item(title, tags, None, &Upload::new(file_name, vec![0; size]))
            .expect("Failed to add test item")
    }
}

/// Build an item without touching any store
///
/// The file name is derived from the title and kind, e.g. `"Logo Azul"` as
/// an image becomes `logo_azul.png`.
#[must_use]
pub fn sample_item(id: u64, title: &str, kind: MediaKind, tags: &[&str]) -> Item {
    let ext = match kind {
        MediaKind::Image => "png",
        MediaKind::Video => "mp4",
    };
    Item {
        id,
        title: title.to_string(),
        file: format!("{}.{ext}", title.to_lowercase().replace(' ', "_")),
        kind,
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        description: String::new(),
        size: "1.0 KB".to_string(),
        uploaded_at: "2024-01-01 00:00:00".to_string(),
    }
}

/// Build an image item with a specific upload timestamp
#[must_use]
pub fn sample_item_at(id: u64, title: &str, uploaded_at: &str) -> Item {
    Item {
        uploaded_at: uploaded_at.to_string(),
        ..sample_item(id, title, MediaKind::Image, &["sample"])
    }
}
