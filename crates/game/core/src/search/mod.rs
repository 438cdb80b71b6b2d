//! Stat distribution search.
//!
//! ```text
//! Character ──► stat_points ──► StatDistributions ──► PerformanceModel ──► BuildSelector
//! ```
//!
//! The search is exhaustive over the free dimensions and single-threaded.
//! It runs in constant memory: candidates are produced lazily and only the
//! current best is kept.

pub mod enumerator;
pub mod selector;

pub use enumerator::{StatDistributions, stat_distributions};
pub use selector::{BuildSelector, Optimum};

use crate::config::{CombatBonuses, Requirements};
use crate::env::{Character, TablesOracle};
use crate::error::PlanError;
use crate::scoring::PerformanceModel;

/// Find the stat distribution with the highest damage output that meets
/// `requirements`.
///
/// All validation happens before the first candidate is generated. If no
/// candidate meets the requirements, the first enumerated distribution is
/// returned and [`Optimum::is_feasible`] is `false`.
///
/// # Errors
///
/// See [`PerformanceModel::new`].
pub fn determine_optimal_stats(
    character: &Character,
    tables: &(impl TablesOracle + ?Sized),
    bonuses: &CombatBonuses,
    requirements: Requirements,
) -> Result<Optimum, PlanError> {
    let model = PerformanceModel::new(character, tables, bonuses, requirements)?;
    let candidates = stat_distributions(character.stat_points());

    tracing::info!(
        "Searching stat distributions: class={}, level={}, transcended={}, budget={}",
        character.class,
        character.base_level,
        character.transcended,
        candidates.budget()
    );
    tracing::debug!(
        "Requirements: evasion >= {}, accuracy >= {}; weapon delay {}",
        model.requirements().minimum_evasion,
        model.requirements().minimum_accuracy,
        model.weapon_delay()
    );

    let optimum = BuildSelector::select(&model, candidates)?;

    if !optimum.is_feasible() {
        tracing::warn!(
            "No distribution meets the requirements ({} candidates); returning first candidate",
            optimum.candidates_examined
        );
    }

    Ok(optimum)
}
