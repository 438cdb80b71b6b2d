//! Combat output model.
//!
//! This module provides pure functions that turn a stat tuple into damage.
//! All combat logic is deterministic and side-effect free.
//!
//! # Core Functions
//!
//! - `base_attack`: Attack of a single strike from weapon and stats
//! - `expected_attack`: Attack averaged over multi-hit procs
//! - `damage_per_second`: Expected attack times hit rate

pub mod damage;

pub use damage::{base_attack, expected_attack};

use crate::stats::speed::hits_per_second;

/// Expected damage per second for an attack value at `attack_speed`.
///
/// Returns `None` when the attack speed is saturated.
pub fn damage_per_second(expected_attack: f64, attack_speed: f64) -> Option<f64> {
    hits_per_second(attack_speed).map(|hits| expected_attack * hits)
}
