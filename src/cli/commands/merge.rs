//! Merge command implementation
//!
//! Implements `conda-lockfile merge` to fold one lockfile into another.

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::output::OutputConfig;
use crate::infra::lockfile_io::{read_lockfile, write_lockfile};

/// Execute the merge command
pub fn execute(
    base: &Path,
    other: &Path,
    destination: &Path,
    include_help_text: bool,
    output: &OutputConfig,
) -> Result<()> {
    let base_lock = read_lockfile(base)
        .with_context(|| format!("Failed to load lockfile {}", base.display()))?;
    let other_lock = read_lockfile(other)
        .with_context(|| format!("Failed to load lockfile {}", other.display()))?;

    let merged = base_lock.merge(other_lock);
    tracing::info!(
        "Merged {} into {}: {} packages",
        other.display(),
        base.display(),
        merged.package.len()
    );

    write_lockfile(&merged, destination, include_help_text)
        .with_context(|| format!("Failed to write lockfile {}", destination.display()))?;

    output.success(&format!(
        "Merged {} packages into {}",
        merged.package.len(),
        destination.display()
    ));
    Ok(())
}
