//! Error types for conda-lockfile
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Lockfile read/write errors
#[derive(Error, Debug)]
pub enum LockfileError {
    /// No file exists at the input path
    #[error("{} not found", path.display())]
    NotFound { path: PathBuf },

    /// The input exists but could not be read
    #[error("Failed to read lockfile '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML decoding or strict model construction failed
    #[error("Failed to parse lockfile '{}': {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Declared format version is missing, not an integer, or too new
    #[error("{} has unknown version {found}", path.display())]
    Version { path: PathBuf, found: String },

    /// The destination could not be opened or written
    #[error("IO error for '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The model could not be encoded as YAML
    #[error("Failed to serialize lockfile: {source}")]
    Serialize {
        #[source]
        source: serde_yaml::Error,
    },
}
