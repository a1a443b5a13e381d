//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary directory holding lockfiles for a test scenario.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Get the path of a file in the test project
    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Read a file from the test project
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Run the conda-lockfile binary inside the project directory
    #[allow(dead_code)]
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_conda-lockfile"))
            .current_dir(self.path())
            .args(args)
            .output()
            .expect("Failed to execute conda-lockfile")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of lines starting with the comment marker
#[allow(dead_code)]
pub fn comment_lines(content: &str) -> usize {
    content.lines().filter(|l| l.starts_with('#')).count()
}

/// Sample lockfile with main, dev and an extra category
#[allow(dead_code)]
pub const SAMPLE_LOCKFILE: &str = r#"version: 1
metadata:
  content_hash:
    linux-64: 0f2b6c4a9d1e
  channels:
  - url: conda-forge
    used_env_vars: []
  platforms:
  - linux-64
  sources:
  - environment.yml
  - extra.yml
  time_metadata:
    created_at: "2024-03-01T12:00:00Z"
package:
- name: python
  version: 3.11.8
  manager: conda
  platform: linux-64
  dependencies:
    libzlib: ">=1.2.13"
  url: https://conda.anaconda.org/conda-forge/linux-64/python-3.11.8.conda
  hash:
    md5: 1a2b3c
    sha256: 4d5e6f
  category: main
  optional: false
- name: libzlib
  version: 1.2.13
  manager: conda
  platform: linux-64
  url: https://conda.anaconda.org/conda-forge/linux-64/libzlib-1.2.13.conda
  hash:
    md5: 7a8b9c
- name: pytest
  version: 8.0.2
  manager: conda
  platform: linux-64
  url: https://conda.anaconda.org/conda-forge/noarch/pytest-8.0.2.conda
  hash:
    md5: aabbcc
  category: dev
  optional: true
- name: sphinx
  version: 7.2.6
  manager: pip
  platform: linux-64
  url: https://files.pythonhosted.org/sphinx-7.2.6-py3-none-any.whl
  hash:
    sha256: ddeeff
  category: docs
  optional: true
  source:
    type: url
    url: https://files.pythonhosted.org/sphinx-7.2.6-py3-none-any.whl
"#;

/// Sample lockfile where every package is in the main category
#[allow(dead_code)]
pub const MAIN_ONLY_LOCKFILE: &str = r"version: 1
metadata:
  content_hash:
    osx-arm64: abcdef
  channels:
  - url: conda-forge
  platforms:
  - osx-arm64
  sources:
  - environment.yml
package:
- name: zlib
  version: 1.3.1
  manager: conda
  platform: osx-arm64
  url: https://conda.anaconda.org/conda-forge/osx-arm64/zlib-1.3.1.conda
  hash:
    md5: 123abc
";
