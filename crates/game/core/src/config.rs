use crate::error::PlanError;

/// Skill, equipment and consumable bonuses baked into the combat formulas.
///
/// The optimizer treats these as constants; they describe the gear and buffs
/// the character is assumed to fight with.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatBonuses {
    /// Flee granted by skills (level 10 Monk flee).
    pub flee_skill_bonus: u32,
    /// Flee granted by equipment (Eden Group Manteau II).
    pub flee_item_bonus: u32,
    /// Number of monsters attacking at once.
    pub mobs_attacking: u32,
    /// Hit granted by skills and equipment.
    pub hit_bonus: u32,
    /// Proc chance of the multi-hit attack, in `[0, 1]`.
    pub triple_attack_chance: f64,
    /// Damage multiplier of a multi-hit proc relative to a normal attack.
    pub triple_attack_multiplier: f64,
    /// Attack speed modifier from consumables (concentration potion).
    pub speed_modifier: f64,
}

impl CombatBonuses {
    pub const DEFAULT_FLEE_SKILL_BONUS: u32 = 15;
    pub const DEFAULT_FLEE_ITEM_BONUS: u32 = 12;
    pub const DEFAULT_MOBS_ATTACKING: u32 = 1;
    pub const DEFAULT_HIT_BONUS: u32 = 0;
    pub const DEFAULT_TRIPLE_ATTACK_CHANCE: f64 = 0.20;
    /// 300% + 400% + 540% of three consecutive strikes.
    pub const DEFAULT_TRIPLE_ATTACK_MULTIPLIER: f64 = 3.0 + 4.0 + 5.4;
    pub const DEFAULT_SPEED_MODIFIER: f64 = 0.1;

    pub const fn new() -> Self {
        Self {
            flee_skill_bonus: Self::DEFAULT_FLEE_SKILL_BONUS,
            flee_item_bonus: Self::DEFAULT_FLEE_ITEM_BONUS,
            mobs_attacking: Self::DEFAULT_MOBS_ATTACKING,
            hit_bonus: Self::DEFAULT_HIT_BONUS,
            triple_attack_chance: Self::DEFAULT_TRIPLE_ATTACK_CHANCE,
            triple_attack_multiplier: Self::DEFAULT_TRIPLE_ATTACK_MULTIPLIER,
            speed_modifier: Self::DEFAULT_SPEED_MODIFIER,
        }
    }
}

impl CombatBonuses {
    /// Most attackers before the flee penalty would turn evasion negative.
    pub const MAXIMUM_MOBS_ATTACKING: u32 = 12;

    /// Reject bonuses that would make damage negative, undefined, or
    /// decreasing in some attribute.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidBonus`] naming the first offending field:
    /// - `triple_attack_chance` outside `[0, 1]`
    /// - `triple_attack_multiplier` negative
    /// - `speed_modifier` outside `[0, 1)`
    /// - `mobs_attacking` above [`Self::MAXIMUM_MOBS_ATTACKING`]
    ///
    /// Non-finite values are always rejected.
    pub fn validate(&self) -> Result<(), PlanError> {
        let chance = self.triple_attack_chance;
        if !(chance.is_finite() && (0.0..=1.0).contains(&chance)) {
            return Err(invalid_bonus("triple_attack_chance", chance));
        }

        let multiplier = self.triple_attack_multiplier;
        if !(multiplier.is_finite() && multiplier >= 0.0) {
            return Err(invalid_bonus("triple_attack_multiplier", multiplier));
        }

        // At 1 the attack interval collapses to zero for every candidate
        let speed = self.speed_modifier;
        if !(speed.is_finite() && (0.0..1.0).contains(&speed)) {
            return Err(invalid_bonus("speed_modifier", speed));
        }

        if self.mobs_attacking > Self::MAXIMUM_MOBS_ATTACKING {
            return Err(invalid_bonus(
                "mobs_attacking",
                f64::from(self.mobs_attacking),
            ));
        }

        Ok(())
    }
}

const fn invalid_bonus(name: &'static str, value: f64) -> PlanError {
    PlanError::InvalidBonus { name, value }
}

impl Default for CombatBonuses {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimum derived stats a candidate must reach to be considered.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Requirements {
    /// Minimum flee.
    pub minimum_evasion: f64,
    /// Minimum hit.
    pub minimum_accuracy: u32,
}

impl Requirements {
    pub const fn new(minimum_evasion: f64, minimum_accuracy: u32) -> Self {
        Self {
            minimum_evasion,
            minimum_accuracy,
        }
    }

    /// Reject requirements no candidate could be compared against.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidThreshold`] for a negative or non-finite
    /// minimum evasion.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.minimum_evasion.is_finite() && self.minimum_evasion >= 0.0 {
            Ok(())
        } else {
            Err(PlanError::InvalidThreshold {
                name: "minimum_evasion",
                value: self.minimum_evasion,
            })
        }
    }
}
