//! Default configuration values

/// Lockfile file name used when no path is given
pub const DEFAULT_LOCKFILE_NAME: &str = "conda-lock.yml";

/// Prefix for every line of the generated preamble
pub const COMMENT_MARKER: &str = "# ";

/// Environment name placeholder used in install hints
pub const ENV_PLACEHOLDER: &str = "YOURENV";

/// Tool name used in generated commands
pub const TOOL_NAME: &str = "conda-lock";

/// Project homepage mentioned in the preamble
pub const TOOL_URL: &str = "https://github.com/conda-incubator/conda-lock";

/// Category of packages required by the environment
pub const MAIN_CATEGORY: &str = "main";

/// Category of optional development packages
pub const DEV_CATEGORY: &str = "dev";

/// Categories that never count as extras
pub const RESERVED_CATEGORIES: [&str; 2] = [MAIN_CATEGORY, DEV_CATEGORY];

/// Minimum proptest iterations
pub const MIN_PROPTEST_ITERATIONS: u32 = 100;
