//! Data-driven planning content and loaders.
//!
//! This crate provides loaders for TOML data files:
//! - Character profiles (character, requirements, combat bonuses)
//! - Weapon delay tables
//!
//! Both formats deserialize straight into statcraft-core types. The bundled
//! files under `data/` are embedded at compile time.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{LoadResult, Profile, ProfileLoader, TablesLoader};
