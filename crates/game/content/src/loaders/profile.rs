//! Character profile loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use statcraft_core::{
    Character, CharacterClass, CombatBonuses, Requirements, Weapon, WeaponCategory,
};

use crate::loaders::{LoadResult, read_file};

/// Everything a search needs apart from the rule tables.
///
/// # File Format
///
/// ```toml
/// [character]
/// class = "Monk"
/// base_level = 84
///
/// [character.weapon]
/// category = "Mace"
/// damage = 175
/// damage_modifier = 1.4
///
/// [requirements]
/// minimum_evasion = 195.0
/// minimum_accuracy = 116
/// ```
///
/// `[requirements]` and `[bonuses]` are optional; missing fields fall back to
/// their defaults.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub character: Character,

    #[serde(default)]
    pub requirements: Requirements,

    #[serde(default)]
    pub bonuses: CombatBonuses,
}

impl Default for Profile {
    /// Level 84 Monk with a 175 damage mace (+40%), needing 195 flee and
    /// 116 hit.
    fn default() -> Self {
        let weapon = Weapon::new(WeaponCategory::Mace, 175).with_damage_modifier(1.4);
        Self {
            character: Character::new(CharacterClass::Monk, 84, weapon),
            requirements: Requirements::new(195.0, 116),
            bonuses: CombatBonuses::default(),
        }
    }
}

/// Loader for character profiles from TOML files.
pub struct ProfileLoader;

impl ProfileLoader {
    /// Load a profile from a TOML file.
    pub fn load(path: &Path) -> LoadResult<Profile> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load profile {}: {}", path.display(), e))
    }

    /// Parse a profile from TOML text.
    pub fn parse(content: &str) -> LoadResult<Profile> {
        let profile: Profile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse profile TOML: {}", e))?;

        Ok(profile)
    }

    /// Load the bundled `monk_mace.toml` profile.
    pub fn embedded() -> LoadResult<Profile> {
        Self::parse(include_str!("../../data/profiles/monk_mace.toml"))
    }
}
