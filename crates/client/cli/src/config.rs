//! CLI runtime configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// Defaults that apply when the matching command-line flag is absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub profile_path: Option<PathBuf>,
    pub tables_path: Option<PathBuf>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `STATCRAFT_PROFILE` - Profile TOML (default: bundled level 84 Monk)
    /// - `STATCRAFT_TABLES` - Weapon delay TOML (default: bundled tables)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            profile_path: read_path(&lookup, "STATCRAFT_PROFILE"),
            tables_path: read_path(&lookup, "STATCRAFT_TABLES"),
        }
    }
}

fn read_path(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<PathBuf> {
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}
