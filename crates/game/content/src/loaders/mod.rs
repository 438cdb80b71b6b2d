//! Content loaders for reading planning data from files.
//!
//! This module provides loaders that convert TOML files into core types.

pub mod profile;
pub mod tables;

pub use profile::{Profile, ProfileLoader};
pub use tables::TablesLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
