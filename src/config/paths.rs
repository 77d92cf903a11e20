//! Path management for Payday
//!
//! ## Path Resolution Order
//!
//! 1. `PAYDAY_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `payday`, e.g. `~/.config/payday`
//!    on Linux or `%APPDATA%\payday\config` on Windows

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::PaydayError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "PAYDAY_DATA_DIR";

/// Manages all paths used by Payday
#[derive(Debug, Clone)]
pub struct PaydayPaths {
    base_dir: PathBuf,
}

impl PaydayPaths {
    /// Resolve the base directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override is not set.
    pub fn new() -> Result<Self, PaydayError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => ProjectDirs::from("", "", "payday")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    PaydayError::Config("Could not determine a config directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create PaydayPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), PaydayError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PaydayError::Io(format!("Failed to create base directory: {}", e)))?;
        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
