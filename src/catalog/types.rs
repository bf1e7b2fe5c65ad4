//! Record types persisted in the catalog
//!
//! The on-disk field names are kept exactly as older catalogs wrote them
//! (`titulo`, `arquivo`, `tipo`, ...), so the Rust-side names are mapped
//! with `serde(rename)`. Existing `metadata.json` files load unchanged.
//!
//! # Types
//!
//! - **`MediaKind`**: Image or video, serialized as `"Imagem"` / `"Vídeo"`
//! - **`Item`**: One cataloged media asset
//!
//! # Examples
//!
//! ```
//! use mediacat::catalog::types::MediaKind;
//!
//! assert_eq!(MediaKind::from_content_type("image/png"), MediaKind::Image);
//! assert_eq!(MediaKind::from_content_type("video/mp4"), MediaKind::Video);
//! assert_eq!(MediaKind::Video.label(), "Vídeo");
//! ```

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Format of the `data_upload` timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Kind of media an item refers to
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaKind {
    #[serde(rename = "Imagem")]
    Image,
    #[serde(rename = "Vídeo")]
    Video,
}

impl MediaKind {
    /// The label stored in the catalog and matched by kind filters
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Image => "Imagem",
            Self::Video => "Vídeo",
        }
    }

    /// Derive the kind from a MIME content type
    ///
    /// Anything under `image/` is an image; every other accepted upload is
    /// treated as video.
    #[must_use]
    pub fn from_content_type(content_type: &str) -> Self {
        if content_type.starts_with("image") {
            Self::Image
        } else {
            Self::Video
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MediaKind {
    type Err = String;

    /// Accepts the stored labels as well as `image` / `video` in any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Imagem" => return Ok(Self::Image),
            "Vídeo" => return Ok(Self::Video),
            _ => {}
        }
        match s.to_lowercase().as_str() {
            "image" | "imagem" => Ok(Self::Image),
            "video" | "vídeo" => Ok(Self::Video),
            _ => Err(format!("unknown media kind '{s}' (expected Imagem or Vídeo)")),
        }
    }
}

/// Metadata for one cataloged media asset
///
/// Every field is always present. `descricao` falls back to an empty string
/// when an older record omits it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub id: u64,
    #[serde(rename = "titulo")]
    pub title: String,
    /// Storage key (file name) of the uploaded media
    #[serde(rename = "arquivo")]
    pub file: String,
    #[serde(rename = "tipo")]
    pub kind: MediaKind,
    pub tags: Vec<String>,
    #[serde(rename = "descricao", default)]
    pub description: String,
    /// Human-readable size, rendered once at upload time
    #[serde(rename = "tamanho")]
    pub size: String,
    /// Upload time as `YYYY-MM-DD HH:MM:SS` local time
    #[serde(rename = "data_upload")]
    pub uploaded_at: String,
}

impl Item {
    /// Parse `uploaded_at` back into a timestamp
    ///
    /// Returns `None` for records whose timestamp is not in the expected format.
    #[must_use]
    pub fn uploaded_at_time(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.uploaded_at, TIMESTAMP_FORMAT).ok()
    }

    /// Check whether the item carries `tag` verbatim
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Current local time rendered in the catalog timestamp format
#[must_use]
pub fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
