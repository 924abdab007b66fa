//! Configuration loading and management
//!
//! Handles parsing of `kanboard.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::lock::DEFAULT_LOCK_TIMEOUT_MS;
use crate::source::DEFAULT_URL;

pub const CONFIG_FILE: &str = "kanboard.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where snapshots come from
    #[serde(default)]
    pub source: SourceConfig,

    /// Where preferences and the last-good view are kept
    #[serde(default)]
    pub state: StateConfig,

    /// Terminal rendering
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Data source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Endpoint returning `{tickets, users}` JSON
    #[serde(default = "default_url")]
    pub url: String,

    /// Read the snapshot from this file instead of `url`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            file: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// State directory configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateConfig {
    /// Override for the platform data directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// How long to wait for another process's lock on a state file
    #[serde(default = "default_lock_timeout_ms")]
    pub lock_timeout_ms: u64,
}

fn default_lock_timeout_ms() -> u64 {
    DEFAULT_LOCK_TIMEOUT_MS
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            dir: None,
            lock_timeout_ms: default_lock_timeout_ms(),
        }
    }
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Maximum width of a rendered card line
    #[serde(default = "default_column_width")]
    pub column_width: usize,
}

fn default_column_width() -> usize {
    48
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            column_width: default_column_width(),
        }
    }
}

impl Config {
    /// Load configuration from a `kanboard.toml` file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load an explicitly named config (errors surface), or the platform
    /// default location (errors fall back to defaults)
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path).map_err(|err| match err {
                Error::InvalidConfig(message) => Error::InvalidConfig(message),
                other => Error::InvalidConfig(format!("{}: {other}", path.display())),
            });
        }

        match crate::storage::project_dirs() {
            Ok(dirs) => Ok(Self::load_or_default(&dirs.config_dir().join(CONFIG_FILE))),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, or return defaults
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring invalid config");
                Self::default()
            }
        }
    }


    fn validate(&self) -> Result<()> {
        self.source.validate()?;
        self.state.validate()?;
        self.display.validate()?;
        Ok(())
    }
}

impl SourceConfig {
    fn validate(&self) -> Result<()> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(Error::InvalidConfig("source.url cannot be empty".to_string()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::InvalidConfig(format!(
                "source.url must be http:// or https:// (got '{url}')"
            )));
        }
        if self.timeout_secs == 0 {
            return Err(Error::InvalidConfig(
                "source.timeout_secs must be > 0".to_string(),
            ));
        }
        if let Some(file) = &self.file {
            if file.as_os_str().is_empty() {
                return Err(Error::InvalidConfig(
                    "source.file cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

impl StateConfig {
    fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.dir {
            if dir.as_os_str().is_empty() {
                return Err(Error::InvalidConfig("state.dir cannot be empty".to_string()));
            }
        }
        if self.lock_timeout_ms == 0 {
            return Err(Error::InvalidConfig(
                "state.lock_timeout_ms must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl DisplayConfig {
    fn validate(&self) -> Result<()> {
        if !(24..=200).contains(&self.column_width) {
            return Err(Error::InvalidConfig(format!(
                "display.column_width must be between 24 and 200 (got {})",
                self.column_width
            )));
        }
        Ok(())
    }
}
