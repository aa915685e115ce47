//! Read-only remap file access and whole-file validation.
//!
//! This module locates and reads remap files and runs every remap they
//! contain through the conflict checks. It never writes: persisting
//! accepted remaps is the job of whatever settings store hosts them.
//!
//! # Example
//!
//! ```no_run
//! use keyremap_manager::config::ConfigManager;
//! use keyremap_manager::config::validator::RemapValidator;
//! use keyremap_manager::core::StandardLayout;
//!
//! let manager = ConfigManager::new("/home/user/.config/keyremap/remaps.conf".into())?;
//! let entries = manager.load_remaps(&StandardLayout::new())?;
//!
//! let report = RemapValidator::new().validate(&entries);
//! if report.has_errors() {
//!     println!("{} conflicts", report.error_count());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod validator;

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub use error::ConfigError;

use crate::core::parser::{parse_remap_file, RemapEntry};
use crate::core::KeyboardLayout;

/// Default location of the remap file, before tilde expansion.
pub const DEFAULT_CONFIG_PATH: &str = "~/.config/keyremap/remaps.conf";

/// Expands a leading `~` in `path`.
///
/// # Errors
///
/// Returns `ConfigError::InvalidPath` if the path is not valid UTF-8.
pub fn expand_path(path: &Path) -> Result<PathBuf, ConfigError> {
    let as_str = path
        .to_str()
        .ok_or_else(|| ConfigError::InvalidPath(path.to_path_buf()))?;

    Ok(PathBuf::from(shellexpand::tilde(as_str).as_ref()))
}

/// Manages access to a remap file.
///
/// The ConfigManager validates the path once on creation and re-reads the
/// file on every call, so edits made by other programs are picked up.
#[derive(Debug)]
pub struct ConfigManager {
    /// Path to the remap file (tilde already expanded).
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new ConfigManager for the given remap file.
    ///
    /// The path is tilde-expanded. If the file is a symlink, a warning is
    /// logged but the operation continues.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist.
    /// Returns `ConfigError::InvalidPath` if the path is not valid UTF-8.
    pub fn new(config_path: PathBuf) -> Result<Self, ConfigError> {
        let config_path = expand_path(&config_path)?;

        if !config_path.exists() {
            return Err(ConfigError::NotFound(config_path));
        }

        if config_path.read_link().is_ok() {
            warn!(path = %config_path.display(), "config file is a symlink");
        }

        Ok(Self { config_path })
    }

    /// Path of the managed file.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Reads the current remap file content.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read.
    pub fn read_config(&self) -> Result<String, ConfigError> {
        Ok(fs::read_to_string(&self.config_path)?)
    }

    /// Reads and parses the remap file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` on read failure and `ConfigError::Parse`
    /// on the first malformed line.
    pub fn load_remaps<L: KeyboardLayout + ?Sized>(
        &self,
        layout: &L,
    ) -> Result<Vec<RemapEntry>, ConfigError> {
        let content = self.read_config()?;
        let entries = parse_remap_file(&content, layout)?;

        info!(
            path = %self.config_path.display(),
            count = entries.len(),
            "remap file loaded"
        );
        Ok(entries)
    }
}

#[cfg(test)]
mod tests;
