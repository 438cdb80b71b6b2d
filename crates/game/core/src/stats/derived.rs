//! Derived Stats - gating statistics computed from core stats.
//!
//! These are NOT stored - always recomputed from a candidate tuple.
//!
//! Formulas:
//! - Evasion (flee) = skill + 100 + (level + AGI + item) × (1 - (mobs - 2) × 0.1)
//! - Accuracy (hit) = DEX + level + bonus

use super::core::{Attribute, Attributes};
use crate::config::CombatBonuses;

/// Base flee every character has before level and AGI.
pub const BASE_EVASION: u32 = 100;

/// Flee change per attacking monster beyond two.
pub const EVASION_PENALTY_PER_MOB: f64 = 0.1;

/// Derived statistics that decide whether a build is acceptable.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedStats {
    /// Flee (dodge rating).
    pub evasion: f64,

    /// Hit (accuracy rating).
    pub accuracy: u32,
}

impl DerivedStats {
    pub fn compute(base_level: u32, stats: &Attributes, bonuses: &CombatBonuses) -> Self {
        Self {
            evasion: evasion(base_level, stats[Attribute::Agi], bonuses),
            accuracy: accuracy(base_level, stats[Attribute::Dex], bonuses),
        }
    }
}

/// Flee for a character at `base_level` with `agi`.
pub fn evasion(base_level: u32, agi: u8, bonuses: &CombatBonuses) -> f64 {
    let mob_factor =
        1.0 - (f64::from(bonuses.mobs_attacking) - 2.0) * EVASION_PENALTY_PER_MOB;
    let flat = f64::from(bonuses.flee_skill_bonus) + f64::from(BASE_EVASION);
    let scaled = f64::from(base_level) + f64::from(agi) + f64::from(bonuses.flee_item_bonus);

    flat + scaled * mob_factor
}

/// Hit for a character at `base_level` with `dex`.
pub fn accuracy(base_level: u32, dex: u8, bonuses: &CombatBonuses) -> u32 {
    u32::from(dex)
        .saturating_add(bonuses.hit_bonus)
        .saturating_add(base_level)
}
