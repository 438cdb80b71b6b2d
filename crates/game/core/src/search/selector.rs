//! Candidate selection.
//!
//! The [`BuildSelector`] scores every candidate with a [`PerformanceModel`]
//! and keeps the one with the highest [`Evaluation::value`].
//!
//! # Determinism
//!
//! A later candidate replaces the current best only when its value is
//! strictly greater, so among equal scores the first candidate in
//! enumeration order wins. Given the same inputs, the same tuple is always
//! selected.

use crate::error::PlanError;
use crate::scoring::{Evaluation, PerformanceModel};
use crate::stats::Attributes;

/// Best candidate found by a search.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Optimum {
    /// Selected stat distribution.
    pub attributes: Attributes,

    /// Evaluation of the selected distribution.
    pub evaluation: Evaluation,

    /// Number of candidates scored to find it.
    pub candidates_examined: u64,
}

impl Optimum {
    /// True if the selected build meets every requirement.
    ///
    /// When no candidate is feasible the selector still returns the first
    /// candidate; this flag is how callers tell the two cases apart.
    pub const fn is_feasible(&self) -> bool {
        self.evaluation.is_feasible()
    }

    /// Damage per second of the selected build (zero if infeasible).
    pub const fn dps(&self) -> f64 {
        self.evaluation.value()
    }
}

/// Stable argmax over a candidate stream.
pub struct BuildSelector;

impl BuildSelector {
    /// Selects the best candidate.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::NoCandidates`] if `candidates` is empty.
    pub fn select<I>(model: &PerformanceModel, candidates: I) -> Result<Optimum, PlanError>
    where
        I: IntoIterator<Item = Attributes>,
    {
        let mut candidates = candidates.into_iter();
        let first = candidates.next().ok_or(PlanError::NoCandidates)?;

        let mut best = Optimum {
            attributes: first,
            evaluation: model.evaluate(&first),
            candidates_examined: 1,
        };

        for stats in candidates {
            best.candidates_examined += 1;
            let evaluation = model.evaluate(&stats);

            // In case of tie, first candidate wins (stable ordering)
            if evaluation.value() > best.evaluation.value() {
                tracing::trace!(
                    "BuildSelector: {} improves to {:.3} dps (candidate #{})",
                    stats,
                    evaluation.value(),
                    best.candidates_examined
                );
                best.attributes = stats;
                best.evaluation = evaluation;
            }
        }

        tracing::debug!(
            "BuildSelector: best = {} (dps={:.3}, feasible={}, examined={})",
            best.attributes,
            best.dps(),
            best.is_feasible(),
            best.candidates_examined
        );

        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CombatBonuses, Requirements};
    use crate::env::{Character, CharacterClass, Weapon, WeaponCategory, WeaponDelayTable};
    use crate::scoring::Feasibility;

    fn model(requirements: Requirements) -> PerformanceModel {
        let weapon = Weapon::new(WeaponCategory::Mace, 175).with_damage_modifier(1.4);
        let monk = Character::new(CharacterClass::Monk, 84, weapon);
        PerformanceModel::new(
            &monk,
            &WeaponDelayTable::standard(),
            &CombatBonuses::default(),
            requirements,
        )
        .expect("valid model")
    }

    #[test]
    fn picks_highest_value() {
        let model = model(Requirements::default());
        let weak = Attributes::new([1, 1, 1, 1, 1, 1]);
        let strong = Attributes::new([50, 50, 1, 1, 30, 1]);

        let optimum = BuildSelector::select(&model, [weak, strong, weak]).expect("non-empty");
        assert_eq!(optimum.attributes, strong);
        assert_eq!(optimum.candidates_examined, 3);
        assert!(optimum.is_feasible());
    }

    #[test]
    fn first_candidate_wins_ties() {
        let model = model(Requirements::default());
        // VIT and INT do not affect damage
        let first = Attributes::new([10, 10, 5, 1, 10, 1]);
        let second = Attributes::new([10, 10, 1, 5, 10, 1]);

        let optimum = BuildSelector::select(&model, [first, second]).expect("non-empty");
        assert_eq!(optimum.attributes, first);

        let optimum = BuildSelector::select(&model, [second, first]).expect("non-empty");
        assert_eq!(optimum.attributes, second);
    }

    #[test]
    fn all_infeasible_returns_first_candidate() {
        let model = model(Requirements::new(0.0, 500));
        let first = Attributes::new([1, 1, 1, 1, 1, 9]);
        let second = Attributes::new([90, 90, 1, 1, 90, 1]);

        let optimum = BuildSelector::select(&model, [first, second]).expect("non-empty");
        assert_eq!(optimum.attributes, first);
        assert!(!optimum.is_feasible());
        assert_eq!(optimum.evaluation.feasibility, Feasibility::AccuracyBelowMinimum);
        assert_eq!(optimum.dps(), 0.0);
    }

    #[test]
    fn empty_stream_is_an_error() {
        let model = model(Requirements::default());
        let result = BuildSelector::select(&model, core::iter::empty());
        assert_eq!(result, Err(PlanError::NoCandidates));
    }
}
