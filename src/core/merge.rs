//! Lockfile merging and package ordering
//!
//! Merging combines a lockfile with a newer partial one (for example a
//! re-lock of a single platform). Packages present in both are taken from the
//! base unless the base no longer covers their platform.

use std::collections::{BTreeMap, BTreeSet};

use super::lockfile::{LockMeta, LockedDependency, Lockfile, Manager, PackageKey};

impl Lockfile {
    /// Merge `other` into this lockfile
    ///
    /// The result is stamped with the current format version.
    pub fn merge(self, other: Lockfile) -> Lockfile {
        let our_platforms: BTreeSet<String> = self.metadata.platforms.iter().cloned().collect();

        let mut ours: BTreeMap<PackageKey, LockedDependency> =
            self.package.into_iter().map(|p| (p.key(), p)).collect();
        let theirs: BTreeMap<PackageKey, LockedDependency> =
            other.package.into_iter().map(|p| (p.key(), p)).collect();

        let keys: BTreeSet<PackageKey> = ours.keys().chain(theirs.keys()).cloned().collect();

        let mut package = Vec::with_capacity(keys.len());
        for key in keys {
            let take_theirs = !ours.contains_key(&key) || !our_platforms.contains(&key.2);
            let picked = if take_theirs {
                theirs.get(&key).cloned()
            } else {
                ours.remove(&key)
            };
            // A key only present in ours with a dropped platform has no replacement
            if let Some(p) = picked {
                package.push(p);
            }
        }

        Lockfile::new(self.metadata.union(other.metadata), toposort(package))
    }
}

impl LockMeta {
    /// Combine metadata, with `other` winning where both define a value
    pub fn union(self, other: LockMeta) -> LockMeta {
        let mut content_hash = self.content_hash;
        content_hash.extend(other.content_hash);

        let platforms: BTreeSet<String> =
            self.platforms.into_iter().chain(other.platforms).collect();

        let mut sources = self.sources;
        for source in other.sources {
            if !sources.contains(&source) {
                sources.push(source);
            }
        }

        let inputs_metadata = match (self.inputs_metadata, other.inputs_metadata) {
            (Some(mut ours), Some(theirs)) => {
                ours.extend(theirs);
                Some(ours)
            }
            (ours, theirs) => theirs.or(ours),
        };

        LockMeta {
            content_hash,
            channels: self.channels,
            platforms: platforms.into_iter().collect(),
            sources,
            time_metadata: other.time_metadata,
            git_metadata: other.git_metadata,
            inputs_metadata,
            custom_metadata: other.custom_metadata,
        }
    }
}

/// Order packages so each conda package follows its dependencies
///
/// Platforms are emitted in sorted order. Within a platform, conda packages
/// come first in dependency order (ties broken by name), then pip packages
/// in their original order.
pub fn toposort(packages: Vec<LockedDependency>) -> Vec<LockedDependency> {
    let mut by_platform: BTreeMap<String, Vec<LockedDependency>> = BTreeMap::new();
    for pkg in packages {
        by_platform.entry(pkg.platform.clone()).or_default().push(pkg);
    }

    let mut ordered = Vec::new();
    for (_, group) in by_platform {
        let (conda, pip): (Vec<_>, Vec<_>) =
            group.into_iter().partition(|p| p.manager == Manager::Conda);
        ordered.extend(sort_conda(conda));
        ordered.extend(pip);
    }
    ordered
}

fn sort_conda(packages: Vec<LockedDependency>) -> Vec<LockedDependency> {
    let mut by_name: BTreeMap<String, LockedDependency> =
        packages.into_iter().map(|p| (p.name.clone(), p)).collect();

    // Pending in-set dependencies of each package
    let mut pending: BTreeMap<String, BTreeSet<String>> = by_name
        .iter()
        .map(|(name, pkg)| {
            let deps = pkg
                .dependency_names()
                .filter(|d| *d != name.as_str() && by_name.contains_key(*d))
                .map(str::to_string)
                .collect();
            (name.clone(), deps)
        })
        .collect();

    let mut ordered = Vec::with_capacity(by_name.len());
    while !pending.is_empty() {
        let ready: Vec<String> = pending
            .iter()
            .filter(|(_, deps)| deps.is_empty())
            .map(|(name, _)| name.clone())
            .collect();

        if ready.is_empty() {
            // Cycle: emit the rest by name
            tracing::debug!("Dependency cycle among {} packages", pending.len());
            ordered.extend(pending.keys().filter_map(|name| by_name.remove(name)));
            break;
        }

        for name in &ready {
            pending.remove(name);
        }
        for deps in pending.values_mut() {
            for name in &ready {
                deps.remove(name);
            }
        }
        ordered.extend(ready.iter().filter_map(|name| by_name.remove(name)));
    }
    ordered
}
