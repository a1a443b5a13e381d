//! Lockfile model
//!
//! The lockfile (conda-lock.yml) records the exact set of resolved packages
//! for every target platform. Fields with a default are held as `Option` so
//! that a value read from disk is distinguishable from one that was never set,
//! and only set fields are written back.
//!
//! `format_version` is never (de)serialized with the other fields. It maps to
//! the top-level `version` key, which [`crate::infra::lockfile_io`] checks on
//! read and stamps on write.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::config::defaults::{DEV_CATEGORY, MAIN_CATEGORY, RESERVED_CATEGORIES};

/// Highest lockfile format version this crate understands, and the one it writes
pub const LOCKFILE_VERSION: u32 = 1;

/// A fully resolved environment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Lockfile {
    /// Schema revision the file was stamped with when read
    #[serde(skip)]
    pub format_version: u32,

    /// Lock metadata
    pub metadata: LockMeta,

    /// Locked packages, in file order
    pub package: Vec<LockedDependency>,
}

/// Metadata describing how the lockfile was produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LockMeta {
    /// Hash of the solver inputs, per platform
    pub content_hash: BTreeMap<String, String>,

    /// Channels the environment was solved against
    pub channels: Vec<Channel>,

    /// Platforms covered by this lockfile
    pub platforms: Vec<String>,

    /// Input specification files, in the order given to the solver
    pub sources: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_metadata: Option<TimeMeta>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_metadata: Option<GitMeta>,

    /// Hashes of each source file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs_metadata: Option<BTreeMap<String, InputMeta>>,

    /// Free-form user metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_metadata: Option<BTreeMap<String, String>>,
}

/// A conda channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Channel {
    pub url: String,

    /// Environment variables referenced by the channel URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_env_vars: Option<Vec<String>>,
}

/// Lockfile creation time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimeMeta {
    pub created_at: String,
}

/// Git state of the repository holding the sources
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GitMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_user_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_user_email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_sha: Option<String>,
}

/// Checksums of a single source file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md5: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}

/// Package manager responsible for a locked package
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Manager {
    Conda,
    Pip,
}

impl std::fmt::Display for Manager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Conda => write!(f, "conda"),
            Self::Pip => write!(f, "pip"),
        }
    }
}

/// Package checksums
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HashModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md5: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}

/// Where a pip package was fetched from, when not a plain index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DependencySource {
    /// Source kind (only `url` exists today)
    #[serde(rename = "type")]
    pub kind: String,

    pub url: String,
}

/// A locked package entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LockedDependency {
    pub name: String,

    /// Exact version
    pub version: String,

    pub manager: Manager,

    /// Platform the package was solved for (e.g. `linux-64`)
    pub platform: String,

    /// Dependency name to version constraint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<BTreeMap<String, String>>,

    /// Download URL
    pub url: String,

    pub hash: HashModel,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,

    /// Dependency group, `main` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<DependencySource>,

    /// Conda build string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,
}

/// Identity of a package within a lockfile
pub type PackageKey = (Manager, String, String);

impl LockedDependency {
    /// Create a package entry with only the required fields set
    pub fn new(
        name: &str,
        version: &str,
        manager: Manager,
        platform: &str,
        url: &str,
        hash: HashModel,
    ) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            manager,
            platform: platform.to_string(),
            dependencies: None,
            url: url.to_string(),
            hash,
            optional: None,
            category: None,
            source: None,
            build: None,
        }
    }

    /// Set the category
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    /// Set the dependency map
    pub fn with_dependencies<I, K, V>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.dependencies = Some(
            deps.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Effective category
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or(MAIN_CATEGORY)
    }

    /// Effective optional flag
    pub fn is_optional(&self) -> bool {
        self.optional.unwrap_or(false)
    }

    /// Names of the packages this one depends on
    pub fn dependency_names(&self) -> impl Iterator<Item = &str> {
        self.dependencies
            .iter()
            .flat_map(|deps| deps.keys().map(String::as_str))
    }

    /// Merge key: manager, name, platform
    pub fn key(&self) -> PackageKey {
        (self.manager, self.name.clone(), self.platform.clone())
    }
}

impl LockMeta {
    /// Create metadata with only the required fields set
    pub fn new(platforms: Vec<String>, sources: Vec<String>) -> Self {
        Self {
            content_hash: BTreeMap::new(),
            channels: Vec::new(),
            platforms,
            sources,
            time_metadata: None,
            git_metadata: None,
            inputs_metadata: None,
            custom_metadata: None,
        }
    }
}

impl Lockfile {
    /// Create a lockfile at the current format version
    pub fn new(metadata: LockMeta, package: Vec<LockedDependency>) -> Self {
        Self {
            format_version: LOCKFILE_VERSION,
            metadata,
            package,
        }
    }

    /// Distinct package categories, sorted
    pub fn categories(&self) -> BTreeSet<&str> {
        self.package.iter().map(LockedDependency::category).collect()
    }

    /// Whether any package belongs to the development category
    pub fn has_dev_dependencies(&self) -> bool {
        self.package.iter().any(|p| p.category() == DEV_CATEGORY)
    }

    /// Categories other than `main` and `dev`, sorted
    pub fn extras(&self) -> Vec<&str> {
        self.categories()
            .into_iter()
            .filter(|c| !RESERVED_CATEGORIES.contains(c))
            .collect()
    }

    /// Packages locked for one platform, in file order
    pub fn packages_for_platform<'a>(
        &'a self,
        platform: &'a str,
    ) -> impl Iterator<Item = &'a LockedDependency> + 'a {
        self.package.iter().filter(move |p| p.platform == platform)
    }

    /// Package count per effective category
    pub fn category_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for pkg in &self.package {
            *counts.entry(pkg.category()).or_insert(0) += 1;
        }
        counts
    }
}
