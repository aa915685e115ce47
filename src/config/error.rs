use std::path::PathBuf;
use thiserror::Error;

use crate::core::parser::ParseError;

/// Errors that can occur while reading remap files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Remap file does not exist.
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Path is not valid UTF-8 and cannot be expanded.
    #[error("Invalid path encoding: {}", .0.display())]
    InvalidPath(PathBuf),
    /// Remap file could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
