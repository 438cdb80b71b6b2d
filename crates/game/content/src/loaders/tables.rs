//! Weapon delay tables loader.

use std::path::Path;

use serde::Deserialize;
use statcraft_core::{CharacterClass, WeaponCategory, WeaponDelayTable};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Deserialize)]
struct TablesFile {
    #[serde(default)]
    delay: Vec<DelayEntry>,
}

#[derive(Debug, Deserialize)]
struct DelayEntry {
    class: CharacterClass,
    category: WeaponCategory,
    delay: f64,
}

/// Loader for weapon delay tables from TOML files.
///
/// Each `[[delay]]` entry maps a class and weapon category to a base attack
/// delay. Later entries for the same pair replace earlier ones.
pub struct TablesLoader;

impl TablesLoader {
    /// Load a delay table from a TOML file.
    pub fn load(path: &Path) -> LoadResult<WeaponDelayTable> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load tables {}: {}", path.display(), e))
    }

    /// Parse a delay table from TOML text.
    ///
    /// Delays that are not positive and finite are rejected here, so a table
    /// that loads can always produce an attack speed.
    pub fn parse(content: &str) -> LoadResult<WeaponDelayTable> {
        let file: TablesFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tables TOML: {}", e))?;

        let mut table = WeaponDelayTable::new();
        for (index, entry) in file.delay.into_iter().enumerate() {
            table = table
                .with_delay(entry.class, entry.category, entry.delay)
                .map_err(|e| anyhow::anyhow!("Invalid delay entry #{}: {}", index + 1, e))?;
        }

        Ok(table)
    }

    /// Load the bundled `tables.toml`.
    pub fn embedded() -> LoadResult<WeaponDelayTable> {
        Self::parse(include_str!("../../data/tables.toml"))
    }
}
