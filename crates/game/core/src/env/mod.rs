//! Read-only inputs of an optimization.
//!
//! The [`Character`] describes who is being planned for; the
//! [`TablesOracle`] supplies class/equipment rule tables. Neither changes
//! while a search runs.
mod character;
mod tables;

pub use character::{Character, CharacterClass, Weapon, WeaponCategory};
pub use tables::{TablesOracle, WeaponDelayTable, weapon_delay_for};
