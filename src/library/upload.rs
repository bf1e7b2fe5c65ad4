//! Candidate uploads and media type detection

use super::LibraryError;
use crate::catalog::MediaKind;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::Path;

/// Accepted image extensions
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// Accepted video extensions
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mov"];

/// A file offered for upload, not yet stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    /// Original file name
    pub name: String,
    pub bytes: Vec<u8>,
    /// Content type declared by the host; guessed from the name when absent
    pub content_type: Option<String>,
}

impl Upload {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
            content_type: None,
        }
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Read an upload from a local file
    ///
    /// # Errors
    ///
    /// Returns an `io::Error` if the path has no file name or cannot be read.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let name = path
            .file_name()
            .and_then(OsStr::to_str)
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("'{}' has no usable file name", path.display()),
                )
            })?
            .to_string();
        let bytes = fs::read(path)?;
        Ok(Self::new(name, bytes))
    }

    /// Size of the upload in bytes
    #[must_use]
    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Lowercased file extension
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.name)
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
    }

    /// Determine the media kind of the upload
    ///
    /// The extension must be one of the accepted image or video extensions.
    /// The kind then follows the content type: `image/*` is an image,
    /// anything else a video.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::UnsupportedMediaType` for any other extension.
    pub fn media_kind(&self) -> Result<MediaKind, LibraryError> {
        let ext = self
            .extension()
            .filter(|ext| {
                IMAGE_EXTENSIONS.contains(&ext.as_str()) || VIDEO_EXTENSIONS.contains(&ext.as_str())
            })
            .ok_or_else(|| LibraryError::UnsupportedMediaType(self.name.clone()))?;

        let kind = match &self.content_type {
            Some(declared) => MediaKind::from_content_type(declared),
            None => mime_guess::from_ext(&ext).first_raw().map_or_else(
                || {
                    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
                        MediaKind::Image
                    } else {
                        MediaKind::Video
                    }
                },
                MediaKind::from_content_type,
            ),
        };
        Ok(kind)
    }
}
