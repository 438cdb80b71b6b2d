//! Damage calculation.

use crate::config::CombatBonuses;
use crate::env::Weapon;
use crate::stats::{Attribute, Attributes};

/// Attack of a single normal strike.
///
/// # Formula
///
/// ```text
/// atk = damage_modifier × weapon_damage + STR + DEX / 5 + LUK / 5
/// ```
///
/// The DEX and LUK terms use integer division.
pub fn base_attack(weapon: &Weapon, stats: &Attributes) -> f64 {
    weapon.damage_modifier * f64::from(weapon.damage)
        + f64::from(stats[Attribute::Str])
        + f64::from(stats[Attribute::Dex] / 5)
        + f64::from(stats[Attribute::Luk] / 5)
}

/// Average attack per swing once multi-hit procs are accounted for.
///
/// # Formula
///
/// ```text
/// expected = (1 - chance) × atk + chance × multiplier × atk
/// ```
pub fn expected_attack(base_attack: f64, bonuses: &CombatBonuses) -> f64 {
    let chance = bonuses.triple_attack_chance;
    (1.0 - chance) * base_attack + chance * bonuses.triple_attack_multiplier * base_attack
}
