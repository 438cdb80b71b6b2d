//! Stat System.
//!
//! # Architecture
//!
//! ```text
//! [ Budget ] ──► [ Core Stats (purchased with the cost schedule) ]
//!                      ↓
//!                [ Derived Stats: evasion, accuracy ]
//!                      ↓
//!                [ Speed: attack speed, hits per second ]
//! ```
//!
//! ## Principles
//!
//! 1. **SSOT**: Core stats are the only chosen values
//! 2. **Unidirectional Flow**: Upper layers never depend on lower layers
//! 3. **Deterministic**: Pure functions, no I/O or randomness

pub mod budget;
pub mod core;
pub mod cost;
pub mod derived;
pub mod speed;

// Re-export primary types
pub use self::core::{ATTRIBUTE_COUNT, Attribute, Attributes, INITIAL_STAT, MAXIMUM_STAT};
pub use budget::{checked_stat_points, stat_points};
pub use cost::{Affordable, cost_of_next_point, cost_of_point, cumulative_cost, max_affordable};
pub use derived::DerivedStats;
pub use speed::{MAX_ATTACK_SPEED, attack_speed, hits_per_second};
