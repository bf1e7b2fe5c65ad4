//! Catalog store for mediacat
//!
//! Persists the complete, ordered item collection as a single pretty-printed
//! JSON array. Every write replaces the whole file: the new content goes to a
//! temporary file next to the catalog, which is then renamed over it, so a
//! reader never observes a half-written catalog.
//!
//! Appends are serialized through an in-process write lock, which makes the
//! load → push → save cycle safe for concurrent callers sharing one `Catalog`.
//! Separate processes writing the same file are not coordinated.

use parking_lot::Mutex;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

pub mod error;
pub mod types;

pub use error::CatalogError;
pub use types::{Item, MediaKind};

/// File-backed store for the item collection
pub struct Catalog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl Catalog {
    /// Create a store for the catalog file at `path` without touching the disk
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    /// Open the catalog at `path`, creating an empty one if none exists
    ///
    /// # Examples
    /// ```no_run
    /// use mediacat::catalog::Catalog;
    /// let catalog = Catalog::open("database/metadata.json").unwrap();
    /// assert!(catalog.load().unwrap().is_empty());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the directory or the initial file cannot be created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let catalog = Self::new(path);
        if !catalog.path.exists() {
            debug!(path = %catalog.path.display(), "creating empty catalog");
            catalog.save(&[])?;
        }
        Ok(catalog)
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the entire persisted collection
    ///
    /// A catalog file that does not exist yet reads as empty.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file exists but cannot be read, and
    /// `CatalogError::Corrupt` if it is not a valid item array.
    pub fn load(&self) -> Result<Vec<Item>, CatalogError> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "catalog file missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let items: Vec<Item> = serde_json::from_slice(&data).map_err(|source| {
            CatalogError::Corrupt {
                path: self.path.clone(),
                source,
            }
        })?;
        debug!(path = %self.path.display(), count = items.len(), "catalog loaded");
        Ok(items)
    }

    /// Read the collection, substituting an empty one on any failure
    ///
    /// An empty result is ambiguous: it means either "no items" or "catalog
    /// unreadable". The failure case is logged at warn level.
    #[must_use]
    pub fn load_lenient(&self) -> Vec<Item> {
        match self.load() {
            Ok(items) => items,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "catalog unreadable, using empty collection");
                Vec::new()
            }
        }
    }

    /// Overwrite the persisted collection with `items`
    ///
    /// Creates the backing directory if absent.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the directory cannot be created, the items
    /// cannot be encoded, or the file cannot be written or renamed into place.
    pub fn save(&self, items: &[Item]) -> Result<(), CatalogError> {
        let _guard = self.write_lock.lock();
        self.write_all(items)
    }

    /// Append `item` under the next free id
    ///
    /// The `id` field of the passed item is replaced.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the current catalog cannot be read or the
    /// updated one cannot be written. An unreadable catalog is never overwritten.
    pub fn append(&self, mut item: Item) -> Result<Item, CatalogError> {
        self.append_with(|id| {
            item.id = id;
            Ok::<_, CatalogError>(item)
        })
    }

    /// Append an item built from the id it will receive
    ///
    /// `build` runs while the write lock is held, after the current catalog
    /// has been read and before it is written back. If `build` fails nothing
    /// is written.
    ///
    /// # Errors
    ///
    /// Returns whatever `build` returns, or a `CatalogError` converted into `E`
    /// if reading or writing the catalog fails.
    pub fn append_with<F, E>(&self, build: F) -> Result<Item, E>
    where
        F: FnOnce(u64) -> Result<Item, E>,
        E: From<CatalogError>,
    {
        let _guard = self.write_lock.lock();

        let mut items = self.load()?;
        let id = next_id(&items);
        let item = build(id)?;

        items.push(item.clone());
        self.write_all(&items)?;
        debug!(id = item.id, file = %item.file, "item appended");
        Ok(item)
    }

    /// Number of persisted items
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the catalog cannot be read.
    pub fn count(&self) -> Result<usize, CatalogError> {
        Ok(self.load()?.len())
    }

    fn write_all(&self, items: &[Item]) -> Result<(), CatalogError> {
        let dir = self.parent_dir()?;
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, items).map_err(CatalogError::Encode)?;
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| CatalogError::Io(e.error))?;

        debug!(path = %self.path.display(), count = items.len(), "catalog saved");
        Ok(())
    }

    fn parent_dir(&self) -> Result<&Path, CatalogError> {
        match self.path.parent() {
            Some(parent) if parent.as_os_str().is_empty() => Ok(Path::new(".")),
            Some(parent) => Ok(parent),
            None => Err(CatalogError::InvalidPath(self.path.display().to_string())),
        }
    }
}

/// Id the next appended item receives
///
/// One more than the largest id present, so ids stay unique even when the
/// collection is not in id order. An empty catalog starts at 1.
#[must_use]
pub fn next_id(items: &[Item]) -> u64 {
    items.iter().map(|item| item.id).max().unwrap_or(0) + 1
}
