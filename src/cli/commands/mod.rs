//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod help_text;
pub mod inspect;
pub mod merge;
pub mod render;

use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

use crate::cli::output::OutputConfig;
use crate::config::defaults::DEFAULT_LOCKFILE_NAME;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a summary of a lockfile
    Inspect {
        /// Lockfile to read
        #[arg(default_value = DEFAULT_LOCKFILE_NAME)]
        path: PathBuf,
    },

    /// Rewrite a lockfile at the current format version
    Render {
        /// Lockfile to read
        #[arg(default_value = DEFAULT_LOCKFILE_NAME)]
        path: PathBuf,

        /// Write here instead of overwriting the input
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Omit the install hints at the top of the file
        #[arg(long)]
        no_help_text: bool,
    },

    /// Merge a newer lockfile into a base lockfile
    Merge {
        /// Base lockfile, preferred for platforms it covers
        base: PathBuf,

        /// Lockfile merged into the base
        other: PathBuf,

        /// Write here instead of overwriting the base
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Omit the install hints at the top of the file
        #[arg(long)]
        no_help_text: bool,
    },

    /// Print the install hints that would head the lockfile
    HelpText {
        /// Lockfile to read
        #[arg(default_value = DEFAULT_LOCKFILE_NAME)]
        path: PathBuf,
    },
}

impl Commands {
    /// Execute the command
    pub fn run(self, output: &OutputConfig) -> Result<()> {
        match self {
            Self::Inspect { path } => inspect::execute(&path, output),
            Self::Render {
                path,
                output: destination,
                no_help_text,
            } => {
                let destination = destination.unwrap_or_else(|| path.clone());
                render::execute(&path, &destination, !no_help_text, output)
            }
            Self::Merge {
                base,
                other,
                output: destination,
                no_help_text,
            } => {
                let destination = destination.unwrap_or_else(|| base.clone());
                merge::execute(&base, &other, &destination, !no_help_text, output)
            }
            Self::HelpText { path } => help_text::execute(&path),
        }
    }
}
