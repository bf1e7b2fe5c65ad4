//! Mediacat - a small media catalog
//!
//! Images and videos are stored in an upload directory and described in a
//! JSON catalog (title, tags, description, size, upload time). The catalog can
//! be listed and searched by free text, media kind and tag, while total
//! storage is held under a fixed quota.
//!
//! The [`library::Library`] type ties the pieces together and is the entry
//! point for hosts; [`catalog`], [`search`] and [`storage`] can also be used
//! on their own.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod library;
pub mod logging;
pub mod output;
pub mod search;
pub mod storage;

#[cfg(test)]
pub mod testing;

pub use catalog::{Item, MediaKind};
pub use library::{Library, Upload};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum MediacatError {
    /// Library error
    #[error("{0}")]
    LibraryError(#[from] library::LibraryError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
