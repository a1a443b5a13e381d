//! Install hints written at the top of a lockfile
//!
//! The preamble is a series of comment blocks whose content depends on the
//! package categories present and the sources the lockfile was solved from.
//! Generation is pure; [`crate::infra::lockfile_io`] writes the result.

use std::path::Path;

use crate::config::defaults::{COMMENT_MARKER, ENV_PLACEHOLDER, TOOL_NAME, TOOL_URL};

use super::lockfile::Lockfile;

/// Render the full comment preamble for a lockfile written as `file_name`
pub fn render_help_text(lockfile: &Lockfile, file_name: &str) -> String {
    let mut out = String::new();

    out.push_str(&comment_block(&intro_section(file_name)));

    if lockfile.has_dev_dependencies() {
        out.push_str(&comment_block(&dev_section(file_name)));
    }

    let extras = lockfile.extras();
    if !extras.is_empty() {
        out.push_str(&comment_block(&extras_section(&extras, file_name)));
    }

    out.push_str(&comment_block(&update_section(
        &lockfile.metadata.sources,
        file_name,
    )));

    out
}

/// Name the install hints use to refer to a lockfile at `path`
pub fn lockfile_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

fn intro_section(file_name: &str) -> String {
    format!(
        r#"
This lock file was generated by {TOOL_NAME} ({TOOL_URL}). DO NOT EDIT!

A "lock file" contains a concrete list of package versions (with checksums) to be installed. Unlike
e.g. `conda env create`, the resulting environment will not change as new package versions become
available, unless you explicitly update the lock file.

Install this environment as "{ENV_PLACEHOLDER}" with:
    {TOOL_NAME} install -n {ENV_PLACEHOLDER} --file {file_name}
"#
    )
}

fn dev_section(file_name: &str) -> String {
    format!(
        r"
This lock contains optional development dependencies. Include them in the installed environment with:
    {TOOL_NAME} install --dev-dependencies -n {ENV_PLACEHOLDER} --file {file_name}
"
    )
}

fn extras_section(extras: &[&str], file_name: &str) -> String {
    let names = extras.join(", ");
    let flags = extras
        .iter()
        .map(|extra| format!("-e {extra}"))
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        r"
This lock contains optional dependency categories {names}. Include them in the installed environment with:
    {TOOL_NAME} install {flags} -n {ENV_PLACEHOLDER} --file {file_name}
"
    )
}

fn update_section(sources: &[String], file_name: &str) -> String {
    let flags = sources
        .iter()
        .map(|source| format!("-f {source}"))
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        r"
To update a single package to the latest version compatible with the version constraints in the source:
    {TOOL_NAME} lock --lockfile {file_name} --update PACKAGE
To re-solve the entire environment, e.g. after changing a version constraint in the source file:
    {TOOL_NAME} {flags} --lockfile {file_name}
"
    )
}

/// Characters YAML treats as line breaks (besides `\r\n`)
const LINE_BREAKS: [char; 5] = ['\n', '\r', '\u{85}', '\u{2028}', '\u{2029}'];

/// Turn a text block into comment lines
///
/// A blank first or last line is dropped, common indentation is removed,
/// and every remaining line is prefixed with the marker and right-trimmed.
/// Any YAML line break starts a new comment line, so substituted values
/// can never end up outside a comment.
pub fn comment_block(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n");
    let lines = dedent(normalized.split(LINE_BREAKS).collect());
    let last = lines.len().saturating_sub(1);

    let mut out = String::new();
    for (idx, line) in lines.iter().enumerate() {
        if (idx == 0 || idx == last) && line.is_empty() {
            continue;
        }
        out.push_str(format!("{COMMENT_MARKER}{line}").trim_end());
        out.push('\n');
    }
    out
}

/// Leading spaces and tabs of a line
fn margin(line: &str) -> &str {
    &line[..line.len() - line.trim_start_matches([' ', '\t']).len()]
}

/// Strip the space/tab prefix shared by all non-blank lines
///
/// Lines holding only spaces and tabs become empty.
fn dedent(lines: Vec<&str>) -> Vec<&str> {
    let common = lines
        .iter()
        .copied()
        .filter(|line| margin(line) != *line)
        .map(margin)
        .reduce(|acc, m| {
            let shared = acc
                .bytes()
                .zip(m.bytes())
                .take_while(|(a, b)| a == b)
                .count();
            &acc[..shared]
        })
        .unwrap_or("");

    lines
        .into_iter()
        .map(|line| {
            if margin(line) == line {
                ""
            } else {
                &line[common.len()..]
            }
        })
        .collect()
}
