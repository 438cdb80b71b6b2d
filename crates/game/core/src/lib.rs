//! Deterministic stat planning rules.
//!
//! `statcraft-core` finds the stat point distribution that maximizes expected
//! damage per second for a fixed character and weapon, subject to minimum
//! evasion and accuracy. It exposes pure APIs: no I/O, no randomness, and no
//! global mutable state. Content loading and presentation live in the
//! `statcraft-content` and `statcraft-cli` crates.
//!
//! The entry point is [`search::determine_optimal_stats`].
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod scoring;
pub mod search;
pub mod stats;

pub use config::{CombatBonuses, Requirements};
pub use env::{
    Character, CharacterClass, TablesOracle, Weapon, WeaponCategory, WeaponDelayTable,
};
pub use error::{ErrorSeverity, PlanError, PlanningError};
pub use scoring::{Evaluation, Feasibility, PerformanceModel};
pub use search::{BuildSelector, Optimum, StatDistributions, determine_optimal_stats};
pub use stats::{Attribute, Attributes, DerivedStats};
