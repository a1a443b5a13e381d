//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::collection::{btree_map, vec};
    use proptest::option;
    use proptest::prelude::*;

    use crate::core::lockfile::{
        Channel, DependencySource, HashModel, LockMeta, LockedDependency, Lockfile, Manager,
        TimeMeta,
    };

    /// Generate a valid package name (lowercase alphanumeric with hyphens)
    pub fn package_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9-]{0,20}[a-z0-9]?".prop_filter("Name must not be empty", |s| !s.is_empty())
    }

    /// Generate a conda-style version string
    pub fn package_version() -> impl Strategy<Value = String> {
        (0u32..30, 0u32..30, 0u32..30)
            .prop_map(|(major, minor, patch)| format!("{major}.{minor}.{patch}"))
    }

    /// Generate a platform identifier
    pub fn platform() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("linux-64".to_string()),
            Just("linux-aarch64".to_string()),
            Just("osx-64".to_string()),
            Just("osx-arm64".to_string()),
            Just("win-64".to_string()),
        ]
    }

    /// Generate a category, including reserved ones and extras
    pub fn category() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("main".to_string()),
            Just("dev".to_string()),
            "[a-z]{1,8}",
        ]
    }

    /// Generate a source file name
    pub fn source_file() -> impl Strategy<Value = String> {
        "[a-z]{1,10}\\.(yml|yaml|toml)"
    }

    /// Generate a valid SHA256 hash (64 hex characters)
    pub fn sha256_hash() -> impl Strategy<Value = String> {
        "[0-9a-f]{64}"
    }

    fn hash_model() -> impl Strategy<Value = HashModel> {
        (option::of("[0-9a-f]{32}"), option::of(sha256_hash()))
            .prop_map(|(md5, sha256)| HashModel { md5, sha256 })
    }

    /// Generate a locked package with a random subset of optional fields set
    pub fn locked_dependency() -> impl Strategy<Value = LockedDependency> {
        (
            package_name(),
            package_version(),
            prop_oneof![Just(Manager::Conda), Just(Manager::Pip)],
            platform(),
            hash_model(),
            option::of(btree_map(package_name(), "[<>=]{0,2}[0-9.]{1,5}", 0..4)),
            option::of(any::<bool>()),
            option::of(category()),
            option::of("[a-z0-9_]{1,12}"),
            any::<bool>(),
        )
            .prop_map(
                |(name, version, manager, platform, hash, deps, optional, category, build, sourced)| {
                    let url = format!("https://example.com/{platform}/{name}-{version}.conda");
                    let mut pkg =
                        LockedDependency::new(&name, &version, manager, &platform, &url, hash);
                    pkg.dependencies = deps;
                    pkg.optional = optional;
                    pkg.category = category;
                    pkg.build = build;
                    if sourced {
                        pkg.source = Some(DependencySource {
                            kind: "url".to_string(),
                            url,
                        });
                    }
                    pkg
                },
            )
    }

    /// Generate lock metadata
    pub fn lock_meta() -> impl Strategy<Value = LockMeta> {
        (
            vec(platform(), 1..4),
            vec(source_file(), 0..4),
            vec("[a-z-]{3,12}", 0..3),
            option::of("20[0-9]{2}-[01][0-9]-[0-3][0-9]T00:00:00Z"),
            option::of(btree_map("[a-z]{1,6}", "[a-z0-9 ]{0,10}", 0..3)),
        )
            .prop_map(|(platforms, sources, channels, created_at, custom)| {
                let mut meta = LockMeta::new(platforms.clone(), sources);
                for platform in platforms {
                    meta.content_hash.insert(platform, "0".repeat(64));
                }
                meta.channels = channels
                    .into_iter()
                    .map(|url| Channel {
                        url,
                        used_env_vars: None,
                    })
                    .collect();
                meta.time_metadata = created_at.map(|created_at| TimeMeta { created_at });
                meta.custom_metadata = custom;
                meta
            })
    }

    /// Generate a whole lockfile at the current format version
    pub fn lockfile() -> impl Strategy<Value = Lockfile> {
        (lock_meta(), vec(locked_dependency(), 0..12))
            .prop_map(|(metadata, package)| Lockfile::new(metadata, package))
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    use crate::config::defaults::MIN_PROPTEST_ITERATIONS;
    use crate::core::help_text::render_help_text;
    use crate::infra::lockfile_io::{read_lockfile, write_lockfile};

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(MIN_PROPTEST_ITERATIONS))]

        #[test]
        fn test_package_name_generator(name in package_name()) {
            prop_assert!(!name.is_empty());
            prop_assert!(name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }

        #[test]
        fn test_sha256_hash_generator(hash in sha256_hash()) {
            prop_assert_eq!(hash.len(), 64);
            prop_assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
        }

        /// Writing then reading yields the same lockfile, with or without help text
        #[test]
        fn prop_write_read_roundtrip(lock in lockfile(), help in any::<bool>()) {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("conda-lock.yml");

            write_lockfile(&lock, &path, help).unwrap();
            let loaded = read_lockfile(&path).unwrap();

            prop_assert_eq!(loaded, lock);
        }

        /// The preamble is made only of trimmed comment lines
        #[test]
        fn prop_help_text_lines_are_comments(lock in lockfile()) {
            let text = render_help_text(&lock, "conda-lock.yml");
            for line in text.lines() {
                prop_assert!(line.starts_with('#'));
                prop_assert_eq!(line, line.trim_end());
            }
        }

        /// Extras are sorted and never include reserved categories
        #[test]
        fn prop_extras_sorted_without_reserved(lock in lockfile()) {
            let extras = lock.extras();
            prop_assert!(extras.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(!extras.contains(&"main"));
            prop_assert!(!extras.contains(&"dev"));
        }
    }
}
