//! Performance model for stat candidates.
//!
//! Every candidate tuple receives an [`Evaluation`]:
//!
//! 1. **Evasion gate**: flee must reach `minimum_evasion`
//! 2. **Accuracy gate**: hit must reach `minimum_accuracy`
//! 3. **Damage**: expected attack × hits per second
//!
//! A candidate that fails a gate (or whose attack speed is saturated) is
//! infeasible. Infeasible candidates rank with a value of zero, but keep the
//! reason so callers can tell "nothing qualified" apart from "the best build
//! deals no damage".
//!
//! All formulas are non-decreasing in every attribute, which is what allows
//! the enumerator to collapse its last dimension.

use crate::combat;
use crate::config::{CombatBonuses, Requirements};
use crate::env::{Character, TablesOracle, weapon_delay_for};
use crate::error::PlanError;
use crate::stats::{Attribute, Attributes, DerivedStats, attack_speed, checked_stat_points};

/// Why a candidate can or cannot be ranked by damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Feasibility {
    /// Both gates passed and damage is well defined.
    Feasible,
    /// Flee below the required minimum.
    EvasionBelowMinimum,
    /// Hit below the required minimum.
    AccuracyBelowMinimum,
    /// Attack speed reached the formula's singularity (ASPD ≥ 200).
    AttackSpeedSaturated,
}

impl Feasibility {
    pub const fn is_feasible(&self) -> bool {
        matches!(self, Self::Feasible)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Feasible => "feasible",
            Self::EvasionBelowMinimum => "evasion below minimum",
            Self::AccuracyBelowMinimum => "accuracy below minimum",
            Self::AttackSpeedSaturated => "attack speed saturated",
        }
    }
}

/// Result of scoring one candidate.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    /// Gating statistics of the candidate.
    pub derived: DerivedStats,

    /// Whether the candidate may be ranked by damage.
    pub feasibility: Feasibility,

    /// Expected damage per second. Zero unless feasible.
    pub dps: f64,
}

impl Evaluation {
    const fn feasible(derived: DerivedStats, dps: f64) -> Self {
        Self {
            derived,
            feasibility: Feasibility::Feasible,
            dps,
        }
    }

    const fn infeasible(derived: DerivedStats, feasibility: Feasibility) -> Self {
        Self {
            derived,
            feasibility,
            dps: 0.0,
        }
    }

    pub const fn is_feasible(&self) -> bool {
        self.feasibility.is_feasible()
    }

    /// Ranking value: damage per second, or zero if infeasible.
    pub const fn value(&self) -> f64 {
        if !self.is_feasible() {
            return 0.0;
        }
        self.dps
    }
}

/// Scores candidates for one character.
///
/// All inputs are validated and the weapon delay is resolved once, at
/// construction. Scoring itself cannot fail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerformanceModel {
    character: Character,
    bonuses: CombatBonuses,
    requirements: Requirements,
    weapon_delay: f64,
}

impl PerformanceModel {
    /// Build a model for `character`.
    ///
    /// # Errors
    ///
    /// - [`PlanError::InvalidLevel`] for base level 0, or a level whose stat
    ///   budget overflows
    /// - [`PlanError::InvalidDamageModifier`] for a negative or non-finite modifier
    /// - [`PlanError::InvalidThreshold`] for a negative or non-finite minimum evasion
    /// - [`PlanError::InvalidBonus`] for combat bonuses outside their range
    /// - [`PlanError::MissingWeaponDelay`] / [`PlanError::InvalidWeaponDelay`]
    ///   when the tables cannot describe the equipped weapon
    pub fn new(
        character: &Character,
        tables: &(impl TablesOracle + ?Sized),
        bonuses: &CombatBonuses,
        requirements: Requirements,
    ) -> Result<Self, PlanError> {
        let level = character.base_level;
        if level == 0 || checked_stat_points(level, character.transcended).is_none() {
            return Err(PlanError::InvalidLevel { level });
        }
        let modifier = character.weapon.damage_modifier;
        if !(modifier.is_finite() && modifier >= 0.0) {
            return Err(PlanError::InvalidDamageModifier { value: modifier });
        }
        requirements.validate()?;
        bonuses.validate()?;
        let weapon_delay = weapon_delay_for(tables, character)?;

        Ok(Self {
            character: *character,
            bonuses: *bonuses,
            requirements,
            weapon_delay,
        })
    }

    pub const fn requirements(&self) -> Requirements {
        self.requirements
    }

    pub const fn weapon_delay(&self) -> f64 {
        self.weapon_delay
    }

    /// Score a candidate.
    pub fn evaluate(&self, stats: &Attributes) -> Evaluation {
        let derived = DerivedStats::compute(self.character.base_level, stats, &self.bonuses);

        if derived.evasion < self.requirements.minimum_evasion {
            return Evaluation::infeasible(derived, Feasibility::EvasionBelowMinimum);
        }
        if derived.accuracy < self.requirements.minimum_accuracy {
            return Evaluation::infeasible(derived, Feasibility::AccuracyBelowMinimum);
        }

        let attack = combat::expected_attack(
            combat::base_attack(&self.character.weapon, stats),
            &self.bonuses,
        );
        let aspd = attack_speed(
            self.weapon_delay,
            stats[Attribute::Agi],
            stats[Attribute::Dex],
            self.bonuses.speed_modifier,
        );

        match combat::damage_per_second(attack, aspd) {
            Some(dps) => Evaluation::feasible(derived, dps),
            None => Evaluation::infeasible(derived, Feasibility::AttackSpeedSaturated),
        }
    }
}
