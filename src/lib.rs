//! conda-lockfile - Versioned lockfile persistence for conda-lock
//!
//! This library reads and writes conda-lock lockfiles: YAML documents with a
//! top-level format `version`, lock metadata and the resolved package list,
//! optionally preceded by generated install hints.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Lockfile model, merging and help text (no I/O operations)
//! - [`infra`] - Infrastructure layer (lockfile reading and writing)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

pub use crate::core::lockfile::{Lockfile, LOCKFILE_VERSION};
pub use crate::error::LockfileError;
pub use crate::infra::lockfile_io::{read_lockfile, write_lockfile};

#[cfg(test)]
pub mod test_utils;
