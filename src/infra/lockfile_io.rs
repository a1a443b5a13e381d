//! Lockfile reading and writing
//!
//! A lockfile on disk is an optional block of `# ` comment lines followed by
//! a YAML mapping with a top-level `version` key and the model fields.
//!
//! Reading rejects files whose `version` is missing, not an integer, or newer
//! than [`LOCKFILE_VERSION`]. Writing always stamps [`LOCKFILE_VERSION`],
//! whatever version the in-memory lockfile was read with.

use serde::Serialize;
use serde_yaml::{Mapping, Value};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::core::help_text::{lockfile_name, render_help_text};
use crate::core::lockfile::{Lockfile, LOCKFILE_VERSION};
use crate::error::LockfileError;

/// Top-level key holding the format version
const VERSION_KEY: &str = "version";

/// On-disk document: the version stamp followed by the lockfile fields
#[derive(Serialize)]
struct Document<'a> {
    version: u32,
    #[serde(flatten)]
    lockfile: &'a Lockfile,
}

/// Read and validate a lockfile
pub fn read_lockfile(path: &Path) -> Result<Lockfile, LockfileError> {
    tracing::debug!("Reading lockfile {}", path.display());

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(LockfileError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Err(e) => {
            return Err(LockfileError::Read {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    let mut tree: Mapping =
        serde_yaml::from_str(&content).map_err(|e| LockfileError::Format {
            path: path.to_path_buf(),
            source: e,
        })?;

    let format_version = check_version(path, tree.remove(VERSION_KEY))?;
    if format_version < LOCKFILE_VERSION {
        tracing::warn!(
            "{} uses format version {format_version}; it will be rewritten as version {LOCKFILE_VERSION}",
            path.display()
        );
    }

    let mut lockfile: Lockfile =
        serde_yaml::from_value(Value::Mapping(tree)).map_err(|e| LockfileError::Format {
            path: path.to_path_buf(),
            source: e,
        })?;
    lockfile.format_version = format_version;

    tracing::info!(
        "Read {} packages for {} platforms from {}",
        lockfile.package.len(),
        lockfile.metadata.platforms.len(),
        path.display()
    );
    Ok(lockfile)
}

/// Validate the extracted `version` value
///
/// Accepts non-negative integers up to [`LOCKFILE_VERSION`].
pub fn check_version(path: &Path, version: Option<Value>) -> Result<u32, LockfileError> {
    let accepted = version
        .as_ref()
        .and_then(Value::as_u64)
        .and_then(|v| u32::try_from(v).ok())
        .filter(|v| *v <= LOCKFILE_VERSION);

    accepted.ok_or_else(|| LockfileError::Version {
        path: path.to_path_buf(),
        found: describe_value(version.as_ref()),
    })
}

fn describe_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "None".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| format!("{other:?}")),
    }
}

/// Encode a lockfile as a YAML document stamped with the current version
pub fn to_yaml(lockfile: &Lockfile) -> Result<String, LockfileError> {
    let document = Document {
        version: LOCKFILE_VERSION,
        lockfile,
    };
    serde_yaml::to_string(&document).map_err(|e| LockfileError::Serialize { source: e })
}

/// Write a lockfile, optionally preceded by the install-hint preamble
///
/// The destination is truncated on open; a failure part way through may
/// leave a partial file behind.
pub fn write_lockfile(
    lockfile: &Lockfile,
    path: &Path,
    include_help_text: bool,
) -> Result<(), LockfileError> {
    tracing::debug!("Writing lockfile {}", path.display());

    let document = to_yaml(lockfile)?;
    let io_error = |e: io::Error| LockfileError::Io {
        path: path.to_path_buf(),
        source: e,
    };

    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);

    if include_help_text {
        writer
            .write_all(render_help_text(lockfile, &lockfile_name(path)).as_bytes())
            .map_err(io_error)?;
    }
    writer.write_all(document.as_bytes()).map_err(io_error)?;
    writer.flush().map_err(io_error)?;

    tracing::info!(
        "Wrote {} packages to {}",
        lockfile.package.len(),
        path.display()
    );
    Ok(())
}
