//! Infrastructure layer
//!
//! Handles all I/O operations on lockfiles.
//! This module is the only place where side effects occur.

pub mod lockfile_io;
