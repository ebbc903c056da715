//! Configuration system for linequill.
//!
//! This module provides the configuration structure with sensible defaults and
//! support for serialization/deserialization via serde. Configuration is loaded
//! from a TOML file and can be overridden by command-line arguments.
//!
//! # Example
//!
//! ```
//! use linequill::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.capacity, 1023);
//! assert_eq!(config.insert_marker, "-- INSERT --");
//!
//! // Create custom configuration
//! let custom = Config {
//!     capacity: 80,
//!     ..Config::default()
//! };
//! assert_eq!(custom.capacity, 80);
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::editor::buffer::DEFAULT_CAPACITY;
use crate::ui::terminal::DEFAULT_INSERT_MARKER;

/// Configuration for the linequill application.
///
/// # Fields
///
/// * `capacity` - Maximum number of characters in the line (default: 1023)
/// * `insert_marker` - Text shown in bold under the line in Insert mode (default: "-- INSERT --")
/// * `log_file` - File to write diagnostics to; logging is off when unset (default: none)
/// * `log_level` - `tracing` filter used when logging is on (default: "info")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Maximum number of characters in the line
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Marker shown under the line in Insert mode
    #[serde(default = "default_insert_marker")]
    pub insert_marker: String,

    /// Diagnostics log file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, e.g. "debug" or "linequill=trace"
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Returns the default line capacity.
fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

/// Returns the default Insert-mode marker.
fn default_insert_marker() -> String {
    DEFAULT_INSERT_MARKER.to_string()
}

/// Returns the default log filter.
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            insert_marker: default_insert_marker(),
            log_file: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/linequill/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("linequill");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        let config_path = match Self::config_path() {
            Some(path) => path,
            None => return Self::default(),
        };

        if !config_path.exists() {
            return Self::default();
        }

        Self::load_from(&config_path).unwrap_or_default()
    }

    /// Loads configuration from a specific file.
    ///
    /// Missing keys take their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read or isn't valid TOML.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to a specific file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}
