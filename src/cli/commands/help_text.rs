//! Help-text command implementation
//!
//! Implements `conda-lockfile help-text` to preview the generated preamble.

use anyhow::{Context, Result};
use std::path::Path;

use crate::core::help_text::{lockfile_name, render_help_text};
use crate::infra::lockfile_io::read_lockfile;

/// Execute the help-text command
pub fn execute(path: &Path) -> Result<()> {
    let lockfile = read_lockfile(path)
        .with_context(|| format!("Failed to load lockfile {}", path.display()))?;

    print!("{}", render_help_text(&lockfile, &lockfile_name(path)));
    Ok(())
}
