//! The media library: catalog, upload storage and quota behind one API
//!
//! [`Library`] is what a host (the CLI, or any other front end) talks to.
//! It validates uploads, checks them against the quota, stores the bytes,
//! appends the catalog record and answers list and search requests.
//!
//! The file is always written before its record is appended. If appending
//! fails the freshly written file is removed again, so a failed add leaves
//! neither a record nor a file behind.

use crate::catalog::types::now_timestamp;
use crate::catalog::{Catalog, Item, MediaKind};
use crate::config::MediacatConfig;
use crate::output::{FileStatus, format_size};
use crate::search::{self, Query};
use crate::storage::{MediaStore, Quota};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub mod error;
pub mod upload;

pub use error::LibraryError;
pub use upload::Upload;

/// Number of items shown by [`Library::recent`] when no limit is given
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Catalog totals and storage usage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LibraryStats {
    pub total: usize,
    pub images: usize,
    pub videos: usize,
    pub used_bytes: u64,
    pub quota: Quota,
}

impl LibraryStats {
    #[must_use]
    pub const fn available_bytes(&self) -> u64 {
        self.quota.available(self.used_bytes)
    }

    #[must_use]
    pub fn usage_ratio(&self) -> f64 {
        self.quota.usage_ratio(self.used_bytes)
    }
}

/// Catalog store, upload storage and quota used together
pub struct Library {
    catalog: Catalog,
    store: MediaStore,
    quota: Quota,
}

impl Library {
    #[must_use]
    pub const fn new(catalog: Catalog, store: MediaStore, quota: Quota) -> Self {
        Self { catalog, store, quota }
    }

    /// Open the catalog and upload directory named in `config`
    ///
    /// Both are created if they do not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError` if either location cannot be created.
    pub fn open(config: &MediacatConfig) -> Result<Self, LibraryError> {
        let catalog = Catalog::open(&config.catalog_path)?;
        let store = MediaStore::open(&config.upload_dir)?;
        Ok(Self::new(catalog, store, Quota::new(config.quota_bytes)))
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn store(&self) -> &MediaStore {
        &self.store
    }

    #[must_use]
    pub const fn quota(&self) -> Quota {
        self.quota
    }

    /// Validate and store an upload, then append its catalog record
    ///
    /// `tags_text` is a comma separated list; pieces are trimmed and empty
    /// ones dropped. Title and description are trimmed.
    ///
    /// # Errors
    ///
    /// Returns a validation variant of `LibraryError` (nothing is written in
    /// that case), or a storage/catalog error if persisting fails.
    pub fn add_item(
        &self,
        title: &str,
        tags_text: &str,
        description: Option<&str>,
        upload: &Upload,
    ) -> Result<Item, LibraryError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(LibraryError::MissingTitle);
        }
        let tags = parse_tags(tags_text);
        if tags.is_empty() {
            return Err(LibraryError::MissingTags);
        }
        let kind = upload.media_kind()?;
        let description = description.map(str::trim).unwrap_or_default().to_string();

        let mut written: Option<String> = None;
        let result = self.catalog.append_with(|id| -> Result<Item, LibraryError> {
            self.check_capacity(upload.len())?;

            let key = self.store.storage_key(id, &upload.name)?;
            let size = self.store.write(&key, &upload.bytes)?;
            written = Some(key.clone());

            Ok(Item {
                id,
                title: title.to_string(),
                file: key,
                kind,
                tags,
                description,
                size: format_size(size),
                uploaded_at: now_timestamp(),
            })
        });

        match result {
            Ok(item) => {
                info!(id = item.id, file = %item.file, kind = %item.kind, "item added");
                Ok(item)
            }
            Err(e) => {
                if let Some(key) = written
                    && let Err(cleanup) = self.store.remove(&key)
                {
                    warn!(key = %key, error = %cleanup, "could not remove orphaned upload");
                }
                Err(e)
            }
        }
    }

    /// All items, in catalog order
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::Catalog` if the catalog exists but is unreadable.
    pub fn list_items(&self) -> Result<Vec<Item>, LibraryError> {
        Ok(self.catalog.load()?)
    }

    /// Items matching free text, kind and tag filters
    ///
    /// `None` or `"all"` disables the kind and tag filters; `None` or an
    /// empty string disables the free-text filter.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::Catalog` if the catalog is unreadable.
    pub fn search(
        &self,
        text: Option<&str>,
        kind: Option<&str>,
        tag: Option<&str>,
    ) -> Result<Vec<Item>, LibraryError> {
        self.search_query(&Query::from_parts(text, kind, tag))
    }

    /// Items matching a prepared [`Query`]
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::Catalog` if the catalog is unreadable.
    pub fn search_query(&self, query: &Query) -> Result<Vec<Item>, LibraryError> {
        Ok(query.run(&self.list_items()?))
    }

    /// Item with the given id
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::ItemNotFound` if no record has this id.
    pub fn find(&self, id: u64) -> Result<Item, LibraryError> {
        self.list_items()?
            .into_iter()
            .find(|item| item.id == id)
            .ok_or(LibraryError::ItemNotFound(id))
    }

    /// Sorted, deduplicated tags across all items
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::Catalog` if the catalog is unreadable.
    pub fn tags(&self) -> Result<Vec<String>, LibraryError> {
        Ok(search::all_tags(&self.list_items()?))
    }

    /// Every distinct tag with the number of items carrying it, sorted by tag
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::Catalog` if the catalog is unreadable.
    pub fn tag_counts(&self) -> Result<Vec<(String, usize)>, LibraryError> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for item in self.list_items()? {
            let mut seen: Vec<&String> = Vec::new();
            for tag in &item.tags {
                if !seen.contains(&tag) {
                    seen.push(tag);
                    *counts.entry(tag.clone()).or_default() += 1;
                }
            }
        }
        Ok(counts.into_iter().collect())
    }

    /// Totals per kind plus storage usage against the quota
    ///
    /// # Errors
    ///
    /// Returns `LibraryError` if the catalog or upload directory cannot be read.
    pub fn stats(&self) -> Result<LibraryStats, LibraryError> {
        let items = self.list_items()?;
        let images = items.iter().filter(|i| i.kind == MediaKind::Image).count();
        Ok(LibraryStats {
            total: items.len(),
            images,
            videos: items.len() - images,
            used_bytes: self.store.used_bytes()?,
            quota: self.quota,
        })
    }

    /// The `limit` most recently uploaded items, newest first
    ///
    /// Timestamps are compared as parsed times. Records whose timestamp does
    /// not parse come after all others, ordered by their raw text. Items with
    /// equal timestamps keep their catalog order.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::Catalog` if the catalog is unreadable.
    pub fn recent(&self, limit: usize) -> Result<Vec<Item>, LibraryError> {
        let mut items = self.list_items()?;
        items.sort_by(|a, b| {
            b.uploaded_at_time()
                .cmp(&a.uploaded_at_time())
                .then_with(|| b.uploaded_at.cmp(&a.uploaded_at))
        });
        items.truncate(limit);
        Ok(items)
    }

    /// Copy the stored file of item `id` to `dest`
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::ItemNotFound` for an unknown id and
    /// `LibraryError::Storage` if the stored file is gone or cannot be copied.
    pub fn export(&self, id: u64, dest: &Path) -> Result<PathBuf, LibraryError> {
        let item = self.find(id)?;
        let written = self.store.export(&item.file, dest)?;
        info!(id, dest = %written.display(), "item exported");
        Ok(written)
    }

    /// Whether the stored file behind `item` still exists
    #[must_use]
    pub fn file_status(&self, item: &Item) -> FileStatus {
        if self.store.exists(&item.file) {
            FileStatus::Present
        } else {
            FileStatus::Missing
        }
    }

    fn check_capacity(&self, incoming: u64) -> Result<(), LibraryError> {
        let used = self.store.used_bytes()?;
        if self.quota.is_reached(used) {
            return Err(LibraryError::QuotaReached {
                limit: self.quota.limit(),
            });
        }
        if !self.quota.admits(used, incoming) {
            return Err(LibraryError::QuotaExceeded {
                requested: incoming,
                available: self.quota.available(used),
            });
        }
        Ok(())
    }
}

/// Split comma separated tag text into trimmed, non-empty tags
///
/// Order, duplicates and casing are kept.
#[must_use]
pub fn parse_tags(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
