//! Upload storage for mediacat
//!
//! Media files live flat in a single upload directory, addressed by a storage
//! key (their file name there). The catalog only refers to files through these
//! keys; this module is the only place that touches the bytes.
//!
//! Keys are collision-free: an upload keeps its original name unless a stored
//! file already uses it, in which case the key is prefixed with the item id
//! (and a counter, should that name be taken too). Writes never replace an
//! existing file.

use std::ffi::OsStr;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod error;
pub mod quota;

pub use error::StorageError;
pub use quota::{DEFAULT_QUOTA_BYTES, Quota};

/// Flat directory of stored media files
#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    /// Create a store rooted at `root` without touching the disk
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Open the store at `root`, creating the directory if needed
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self, StorageError> {
        let store = Self::new(root);
        fs::create_dir_all(&store.root)?;
        Ok(store)
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of the file stored under `key`
    #[must_use]
    pub fn path_of(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    /// Check whether a file is stored under `key`
    #[must_use]
    pub fn exists(&self, key: &str) -> bool {
        self.path_of(key).is_file()
    }

    /// Total size in bytes of all files in the upload directory
    ///
    /// Recomputed from the directory listing on every call.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the directory cannot be scanned.
    pub fn used_bytes(&self) -> Result<u64, StorageError> {
        if !self.root.exists() {
            return Ok(0);
        }

        let root = self
            .root
            .to_str()
            .ok_or_else(|| StorageError::PathError(self.root.display().to_string()))?;
        let pattern = format!("{}/*", glob::Pattern::escape(root));

        let mut total = 0u64;
        for entry in glob::glob(&pattern)? {
            let path = entry.map_err(|e| StorageError::Io(e.into_error()))?;
            match fs::metadata(&path) {
                Ok(meta) if meta.is_file() => total += meta.len(),
                Ok(_) => {}
                // removed between listing and stat
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(total)
    }

    /// Choose the storage key for an upload named `name` that will become item `id`
    ///
    /// Directory components in `name` are discarded. Candidates are tried in
    /// order `name`, `<id>_name`, `<id>_2_name`, `<id>_3_name`, ... and the
    /// first one not present in the store is returned.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidName` if `name` has no file name component.
    pub fn storage_key(&self, id: u64, name: &str) -> Result<String, StorageError> {
        let base = base_name(name)?;
        if !self.is_taken(&base) {
            return Ok(base);
        }

        let mut key = format!("{id}_{base}");
        let mut n = 2u64;
        while self.is_taken(&key) {
            key = format!("{id}_{n}_{base}");
            n += 1;
        }
        Ok(key)
    }

    /// Write `bytes` under a new `key`, returning the size on disk
    ///
    /// # Errors
    ///
    /// Returns `StorageError::KeyTaken` if a file is already stored under
    /// `key`, or `StorageError::Io` if the file cannot be written.
    pub fn write(&self, key: &str, bytes: &[u8]) -> Result<u64, StorageError> {
        fs::create_dir_all(&self.root)?;
        let path = self.path_of(key);
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| match e.kind() {
                io::ErrorKind::AlreadyExists => StorageError::KeyTaken(key.to_string()),
                _ => StorageError::Io(e),
            })?;
        file.write_all(bytes)?;
        file.sync_all()?;
        let size = file.metadata()?.len();
        debug!(key, size, "stored media file");
        Ok(size)
    }

    // symlink_metadata so a dangling link still counts as taken
    fn is_taken(&self, key: &str) -> bool {
        fs::symlink_metadata(self.path_of(key)).is_ok()
    }

    /// Delete the file stored under `key`
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the file exists but cannot be removed.
    pub fn remove(&self, key: &str) -> Result<bool, StorageError> {
        match fs::remove_file(self.path_of(key)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Copy the file stored under `key` to `dest`
    ///
    /// If `dest` is an existing directory the file keeps its storage key as
    /// name inside it. Returns the path written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::FileNotFound` if nothing is stored under `key`,
    /// or `StorageError::Io` if the copy fails.
    pub fn export(&self, key: &str, dest: &Path) -> Result<PathBuf, StorageError> {
        if !self.exists(key) {
            return Err(StorageError::FileNotFound(key.to_string()));
        }

        let target = if dest.is_dir() {
            dest.join(key)
        } else {
            dest.to_path_buf()
        };
        fs::copy(self.path_of(key), &target)?;
        Ok(target)
    }
}

fn base_name(name: &str) -> Result<String, StorageError> {
    Path::new(name)
        .file_name()
        .and_then(OsStr::to_str)
        .filter(|n| !n.trim().is_empty())
        .map(str::to_string)
        .ok_or_else(|| StorageError::InvalidName(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, MediaStore) {
        let dir = TempDir::new().unwrap();
        let store = MediaStore::open(dir.path().join("uploads")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_open_creates_directory() {
        let (_dir, store) = store();
        assert!(store.root().is_dir());
        assert_eq!(store.used_bytes().unwrap(), 0);
    }

    #[test]
    fn test_used_bytes_missing_directory() {
        let dir = TempDir::new().unwrap();
        let store = MediaStore::new(dir.path().join("never-created"));
        assert_eq!(store.used_bytes().unwrap(), 0);
    }

    #[test]
    fn test_used_bytes_sums_files_only() {
        let (_dir, store) = store();
        store.write("a.png", &[0u8; 100]).unwrap();
        store.write("b.mp4", &[0u8; 250]).unwrap();
        fs::create_dir(store.root().join("nested")).unwrap();
        fs::write(store.root().join("nested").join("c.png"), [0u8; 999]).unwrap();

        assert_eq!(store.used_bytes().unwrap(), 350);
    }

    #[test]
    fn test_write_returns_size_and_exists() {
        let (_dir, store) = store();
        let size = store.write("logo.png", b"png bytes").unwrap();

        assert_eq!(size, 9);
        assert!(store.exists("logo.png"));
        assert!(!store.exists("other.png"));
    }

    #[test]
    fn test_storage_key_keeps_free_name() {
        let (_dir, store) = store();
        assert_eq!(store.storage_key(1, "logo.png").unwrap(), "logo.png");
    }

    #[test]
    fn test_storage_key_prefixes_on_collision() {
        let (_dir, store) = store();
        store.write("logo.png", b"first").unwrap();

        assert_eq!(store.storage_key(2, "logo.png").unwrap(), "2_logo.png");
    }

    #[test]
    fn test_storage_key_skips_taken_prefixed_name() {
        let (_dir, store) = store();
        store.write("photo.jpg", b"one").unwrap();
        store.write("3_photo.jpg", b"two").unwrap();
        assert_eq!(store.storage_key(3, "photo.jpg").unwrap(), "3_2_photo.jpg");

        store.write("3_2_photo.jpg", b"three").unwrap();
        assert_eq!(store.storage_key(3, "photo.jpg").unwrap(), "3_3_photo.jpg");
    }

    #[test]
    fn test_write_never_replaces_existing_file() {
        let (_dir, store) = store();
        store.write("logo.png", b"first").unwrap();

        let result = store.write("logo.png", b"second");
        assert!(matches!(result, Err(StorageError::KeyTaken(ref key)) if key == "logo.png"));
        assert_eq!(fs::read(store.path_of("logo.png")).unwrap(), b"first");
    }

    #[test]
    fn test_storage_key_strips_directories() {
        let (_dir, store) = store();
        assert_eq!(store.storage_key(1, "../../etc/photo.jpg").unwrap(), "photo.jpg");
        assert_eq!(store.storage_key(1, "dir/clip.mov").unwrap(), "clip.mov");
    }

    #[test]
    fn test_storage_key_rejects_empty_name() {
        let (_dir, store) = store();
        assert!(matches!(store.storage_key(1, ""), Err(StorageError::InvalidName(_))));
        assert!(matches!(store.storage_key(1, ".."), Err(StorageError::InvalidName(_))));
    }

    #[test]
    fn test_remove() {
        let (_dir, store) = store();
        store.write("x.gif", b"gif").unwrap();

        assert!(store.remove("x.gif").unwrap());
        assert!(!store.remove("x.gif").unwrap());
        assert!(!store.exists("x.gif"));
    }

    #[test]
    fn test_export_to_directory_and_file() {
        let (dir, store) = store();
        store.write("clip.mp4", b"video").unwrap();

        let out_dir = dir.path().join("out");
        fs::create_dir(&out_dir).unwrap();
        let written = store.export("clip.mp4", &out_dir).unwrap();
        assert_eq!(written, out_dir.join("clip.mp4"));
        assert_eq!(fs::read(&written).unwrap(), b"video");

        let renamed = dir.path().join("copy.mp4");
        let written = store.export("clip.mp4", &renamed).unwrap();
        assert_eq!(written, renamed);
        assert!(renamed.exists());
    }

    #[test]
    fn test_export_missing_file() {
        let (dir, store) = store();
        let result = store.export("ghost.png", dir.path());
        assert!(matches!(result, Err(StorageError::FileNotFound(_))));
    }
}
