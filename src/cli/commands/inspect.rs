//! Inspect command implementation
//!
//! Implements `conda-lockfile inspect` to summarize a lockfile.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::cli::output::{status, OutputConfig};
use crate::core::lockfile::{Lockfile, LOCKFILE_VERSION};
use crate::infra::lockfile_io::read_lockfile;

/// Machine-readable lockfile summary
#[derive(Debug, Serialize)]
pub struct Summary<'a> {
    pub format_version: u32,
    pub platforms: &'a [String],
    pub sources: &'a [String],
    pub packages: usize,
    pub platform_packages: BTreeMap<&'a str, usize>,
    pub categories: BTreeMap<&'a str, usize>,
    pub extras: Vec<&'a str>,
}

impl<'a> Summary<'a> {
    pub fn new(lockfile: &'a Lockfile) -> Self {
        Self {
            format_version: lockfile.format_version,
            platforms: &lockfile.metadata.platforms,
            sources: &lockfile.metadata.sources,
            packages: lockfile.package.len(),
            platform_packages: lockfile
                .metadata
                .platforms
                .iter()
                .map(|p| (p.as_str(), lockfile.packages_for_platform(p).count()))
                .collect(),
            categories: lockfile.category_counts(),
            extras: lockfile.extras(),
        }
    }
}

/// Execute the inspect command
pub fn execute(path: &Path, output: &OutputConfig) -> Result<()> {
    let lockfile = read_lockfile(path)
        .with_context(|| format!("Failed to load lockfile {}", path.display()))?;
    let summary = Summary::new(&lockfile);

    if output.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }
    if output.quiet {
        return Ok(());
    }

    println!("Lockfile: {}", path.display());
    println!("  Format version: {}", summary.format_version);
    if summary.format_version < LOCKFILE_VERSION {
        println!(
            "  {} Older than the current version {LOCKFILE_VERSION}; run 'render' to upgrade",
            status::WARNING
        );
    }
    println!("  Platforms: {}", summary.platforms.join(", "));
    for (platform, count) in &summary.platform_packages {
        println!("    • {platform}: {count} packages");
    }
    println!("  Sources: {}", summary.sources.join(", "));
    println!("  Packages: {}", summary.packages);
    for (category, count) in &summary.categories {
        println!("    • {category}: {count}");
    }

    Ok(())
}
