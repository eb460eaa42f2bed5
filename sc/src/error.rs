//! Scaffold error types

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while creating a project
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Target already exists: {path}")]
    TargetExists { path: PathBuf },

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, ScaffoldError>;
