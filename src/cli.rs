//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for mediacat using the
//! `clap` crate. The CLI is a thin host over [`Library`](crate::library::Library):
//! every command maps onto one library operation.
//!
//! # Commands
//!
//! - **add**: Store a media file with title, tags and description
//! - **list**: Show every cataloged item (default)
//! - **search**: Filter by free text, kind and tag
//! - **tags**: Show every tag with its usage count
//! - **stats**: Show totals and storage usage
//! - **recent**: Show the most recent uploads
//! - **export**: Copy a stored file out of the library
//! - **config**: Read or change settings
//!
//! # Examples
//!
//! ```no_run
//! use mediacat::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_args();
//! if let Commands::Search { query, .. } = cli.get_command() {
//!     println!("searching for {query:?}");
//! }
//! ```

use crate::library::DEFAULT_RECENT_LIMIT;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., quota_bytes=104857600)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., upload_dir)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Print the path of the configuration file
    Path,
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "mediacat")]
#[command(about = "A small media catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add an image or video to the catalog
    #[command(visible_alias = "a")]
    Add {
        /// Media file to upload
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Title of the item
        #[arg(short = 't', long = "title")]
        title: String,

        /// Comma separated tags (e.g. "logo, 2024")
        #[arg(short = 'g', long = "tags", value_name = "TAGS")]
        tags: String,

        /// Optional free-text description
        #[arg(short = 'd', long = "description")]
        description: Option<String>,

        /// Content type to use instead of guessing from the file name
        #[arg(long = "content-type", value_name = "MIME")]
        content_type: Option<String>,
    },

    /// List every item in the catalog
    #[command(visible_alias = "ls")]
    List,

    /// Search the catalog
    #[command(visible_alias = "s")]
    Search {
        /// Free text matched against title, description and tags (case-insensitive)
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        /// Only this kind: Imagem, Vídeo or all
        #[arg(short = 'k', long = "kind", value_name = "KIND")]
        kind: Option<String>,

        /// Only items carrying exactly this tag, or all
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tag: Option<String>,
    },

    /// List all tags with usage counts
    Tags,

    /// Show catalog totals and storage usage
    Stats,

    /// Show the most recently uploaded items
    Recent {
        /// Number of items to show
        #[arg(short = 'n', long = "limit", default_value_t = DEFAULT_RECENT_LIMIT)]
        limit: usize,
    },

    /// Copy the stored file of an item to a destination
    Export {
        /// Item id
        id: u64,

        /// Destination file or directory
        dest: PathBuf,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to List if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::List)
    }
}
