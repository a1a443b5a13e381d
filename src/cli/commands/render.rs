//! Render command implementation
//!
//! Implements `conda-lockfile render` to rewrite a lockfile at the current
//! format version with freshly generated install hints.

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::output::OutputConfig;
use crate::infra::lockfile_io::{read_lockfile, write_lockfile};

/// Execute the render command
pub fn execute(
    path: &Path,
    destination: &Path,
    include_help_text: bool,
    output: &OutputConfig,
) -> Result<()> {
    let lockfile = read_lockfile(path)
        .with_context(|| format!("Failed to load lockfile {}", path.display()))?;

    tracing::info!(
        "Rendering {} to {}",
        path.display(),
        destination.display()
    );

    write_lockfile(&lockfile, destination, include_help_text)
        .with_context(|| format!("Failed to write lockfile {}", destination.display()))?;

    output.success(&format!(
        "Wrote {} ({} packages)",
        destination.display(),
        lockfile.package.len()
    ));
    Ok(())
}
