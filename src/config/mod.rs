//! Configuration module for mediacat
//!
//! Manages where the catalog and uploads live, the storage quota and output
//! preferences. Configuration is stored in the user's config directory and
//! can be overridden per run with `MEDIACAT_*` environment variables
//! (e.g. `MEDIACAT_QUOTA_BYTES=1048576`).

use crate::storage::DEFAULT_QUOTA_BYTES;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Keys accepted by [`MediacatConfig::get`] and [`MediacatConfig::set`]
pub const KEYS: &[&str] = &["catalog_path", "upload_dir", "quota_bytes", "quiet", "log_level"];

const ENV_PREFIX: &str = "MEDIACAT";

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MediacatConfig {
    /// JSON file holding the catalog
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// Directory holding the uploaded media files
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,

    /// Maximum total bytes of stored media
    #[serde(default = "default_quota_bytes")]
    pub quota_bytes: u64,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Log filter used when `MEDIACAT_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mediacat")
}

fn default_catalog_path() -> PathBuf {
    data_dir().join("database").join("metadata.json")
}

fn default_upload_dir() -> PathBuf {
    data_dir().join("uploads")
}

const fn default_quota_bytes() -> u64 {
    DEFAULT_QUOTA_BYTES
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for MediacatConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            upload_dir: default_upload_dir(),
            quota_bytes: default_quota_bytes(),
            quiet: false,
            log_level: default_log_level(),
        }
    }
}

impl MediacatConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("mediacat").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, layered with environment overrides
    ///
    /// A missing file is created with default values first.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            Self::default().save_to(path)?;
        }

        let settings = Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be determined or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Read a setting as text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "catalog_path" => Ok(self.catalog_path.display().to_string()),
            "upload_dir" => Ok(self.upload_dir.display().to_string()),
            "quota_bytes" => Ok(self.quota_bytes.to_string()),
            "quiet" => Ok(self.quiet.to_string()),
            "log_level" => Ok(self.log_level.clone()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Change a setting from text (does not save)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key or a value that does not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "catalog_path" => self.catalog_path = PathBuf::from(value),
            "upload_dir" => self.upload_dir = PathBuf::from(value),
            "quota_bytes" => {
                self.quota_bytes = value.parse().map_err(|_| {
                    ConfigError::Message(format!(
                        "Invalid value for quota_bytes: '{value}'. Use a number of bytes"
                    ))
                })?;
            }
            "quiet" => {
                self.quiet = value.parse().map_err(|_| {
                    ConfigError::Message(format!(
                        "Invalid value for quiet: '{value}'. Use 'true' or 'false'"
                    ))
                })?;
            }
            "log_level" => self.log_level = value.to_string(),
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::Message(format!(
        "Unknown configuration key: '{key}'. Available keys: {}",
        KEYS.join(", ")
    ))
}
