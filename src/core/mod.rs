//! Core business logic module
//!
//! This module contains the lockfile model and everything computed from it.
//! It has NO I/O operations - those belong in [`crate::infra`].
//!
//! # Submodules
//!
//! - [`lockfile`] - Lockfile model and derived queries
//! - [`help_text`] - Install-hint preamble generation
//! - [`merge`] - Lockfile merging and package ordering

pub mod help_text;
pub mod lockfile;
pub mod merge;
