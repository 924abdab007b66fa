//! Storage layer for kanboard
//!
//! All persisted state lives in one directory, by default the platform data
//! directory (`directories::ProjectDirs`), overridable through config or
//! `--state-dir`.
//!
//! # Directory Structure
//!
//! ```text
//! <state>/
//!   preferences.toml        # grouping/sorting selection
//!   preferences.toml.lock
//!   last_board.json         # last successfully built board view
//!   last_board.json.lock
//! ```

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Error, Result};
use crate::lock::{self, DEFAULT_LOCK_TIMEOUT_MS};

const PREFERENCES_FILE: &str = "preferences.toml";
const LAST_BOARD_FILE: &str = "last_board.json";

/// Storage manager for kanboard state
#[derive(Debug, Clone)]
pub struct Storage {
    state_dir: PathBuf,
    lock_timeout_ms: u64,
}

impl Storage {
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            state_dir: state_dir.into(),
            lock_timeout_ms: DEFAULT_LOCK_TIMEOUT_MS,
        }
    }

    /// Storage rooted at the platform data directory
    pub fn platform_default() -> Result<Self> {
        let dirs = project_dirs()?;
        Ok(Self::new(dirs.data_dir()))
    }

    /// Explicit override if given, otherwise the platform default
    pub fn resolve(override_dir: Option<&Path>) -> Result<Self> {
        match override_dir {
            Some(dir) => Ok(Self::new(dir)),
            None => Self::platform_default(),
        }
    }

    pub fn with_lock_timeout(mut self, timeout_ms: u64) -> Self {
        self.lock_timeout_ms = timeout_ms;
        self
    }

    // =========================================================================
    // Path accessors
    // =========================================================================

    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }

    pub fn preferences_file(&self) -> PathBuf {
        self.state_dir.join(PREFERENCES_FILE)
    }

    pub fn last_board_file(&self) -> PathBuf {
        self.state_dir.join(LAST_BOARD_FILE)
    }

    // =========================================================================
    // Generic locked IO
    // =========================================================================

    pub fn read_text(&self, path: &Path) -> Result<Option<String>> {
        lock::read_locked_str(path, self.lock_timeout_ms)
    }

    pub fn write_text(&self, path: &Path, content: &str) -> Result<()> {
        lock::write_atomic_locked(path, content.as_bytes(), self.lock_timeout_ms)
    }

    pub fn remove(&self, path: &Path) -> Result<bool> {
        lock::remove_locked(path, self.lock_timeout_ms)
    }

    pub fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        match self.read_text(path)? {
            Some(content) => Ok(Some(serde_json::from_str(&content)?)),
            None => Ok(None),
        }
    }

    pub fn write_json<T: Serialize>(&self, path: &Path, data: &T) -> Result<()> {
        let content = serde_json::to_string_pretty(data)?;
        self.write_text(path, &content)
    }
}

pub(crate) fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "kanboard").ok_or_else(|| {
        Error::InvalidConfig(
            "no home directory found; pass --state-dir or set KANBOARD_STATE_DIR".to_string(),
        )
    })
}
