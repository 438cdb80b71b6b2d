//! Character and weapon descriptors.
//!
//! These are the fixed inputs of an optimization: the search never changes
//! class, level, or equipment, it only distributes stat points.

use strum::{Display, EnumIter, EnumString};

use crate::stats::budget;

/// Job class. Determines weapon delays through the tables oracle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharacterClass {
    Novice,
    Swordsman,
    Acolyte,
    Priest,
    Monk,
    Champion,
    Knight,
    Assassin,
}

/// Weapon category used for delay lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeaponCategory {
    Bare,
    Dagger,
    Sword,
    Spear,
    Axe,
    /// Blunt weapons.
    #[strum(to_string = "Mace", serialize = "blunt")]
    #[cfg_attr(feature = "serde", serde(alias = "blunt"))]
    Mace,
    Staff,
    Knuckle,
    Katar,
    Bow,
}

/// Equipped weapon.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub category: WeaponCategory,
    /// Base weapon attack.
    pub damage: u32,
    /// Multiplier applied to `damage` (refinement, cards, size modifiers).
    #[cfg_attr(feature = "serde", serde(default = "Weapon::default_damage_modifier"))]
    pub damage_modifier: f64,
}

impl Weapon {
    pub const fn new(category: WeaponCategory, damage: u32) -> Self {
        Self {
            category,
            damage,
            damage_modifier: 1.0,
        }
    }

    /// Set the damage multiplier (builder pattern).
    #[must_use]
    pub const fn with_damage_modifier(mut self, damage_modifier: f64) -> Self {
        self.damage_modifier = damage_modifier;
        self
    }

    #[cfg(feature = "serde")]
    fn default_damage_modifier() -> f64 {
        1.0
    }
}

/// The character whose stats are being planned.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub class: CharacterClass,
    pub base_level: u32,
    pub weapon: Weapon,
    #[cfg_attr(feature = "serde", serde(default))]
    pub transcended: bool,
}

impl Character {
    pub const fn new(class: CharacterClass, base_level: u32, weapon: Weapon) -> Self {
        Self {
            class,
            base_level,
            weapon,
            transcended: false,
        }
    }

    /// Mark the character as transcended (builder pattern).
    #[must_use]
    pub const fn transcended(mut self, transcended: bool) -> Self {
        self.transcended = transcended;
        self
    }

    /// Total stat points available to this character.
    pub fn stat_points(&self) -> u32 {
        budget::stat_points(self.base_level, self.transcended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!("monk".parse::<CharacterClass>(), Ok(CharacterClass::Monk));
        assert_eq!("MACE".parse::<WeaponCategory>(), Ok(WeaponCategory::Mace));
        assert_eq!("blunt".parse::<WeaponCategory>(), Ok(WeaponCategory::Mace));
        assert_eq!(WeaponCategory::Mace.to_string(), "Mace");
    }

    #[test]
    fn stat_points_follow_level_and_tier() {
        let weapon = Weapon::new(WeaponCategory::Mace, 175).with_damage_modifier(1.4);
        let monk = Character::new(CharacterClass::Monk, 84, weapon);

        assert_eq!(monk.stat_points(), 961);
        assert_eq!(monk.transcended(true).stat_points(), 1013);
        assert_eq!(monk.weapon.damage_modifier, 1.4);
    }
}
