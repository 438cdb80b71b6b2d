//! Common error infrastructure for statcraft-core.
//!
//! Planning can only fail before the search starts: either the inputs are
//! malformed or the rule tables cannot describe the requested character.
//! Candidates that miss a stat requirement are not errors; they are reported
//! through [`crate::scoring::Feasibility`].
//!
//! # Design Principles
//!
//! - **Fail Early**: Every error is raised before the first candidate is scored
//! - **Rich Context**: Errors carry the offending class, weapon, or value
//! - **Severity Classification**: Errors are categorized for recovery strategies

use crate::env::{CharacterClass, WeaponCategory};

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: Invalid caller input that should be rejected without retry
/// - **Fatal**: Rule tables cannot support the request; fix the configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: level 0, negative stat requirement
    Validation,

    /// Fatal error - configuration cannot support the request.
    ///
    /// Examples: no weapon delay for the class/weapon pair
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if the error stems from configuration rather than input.
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all statcraft-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who has to fix it, not on impact
pub trait PlanningError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised while preparing a stat optimization.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// No weapon delay is known for the class/weapon combination.
    #[error("no weapon delay configured for {class} wielding {category}")]
    MissingWeaponDelay {
        class: CharacterClass,
        category: WeaponCategory,
    },

    /// Weapon delay exists but cannot produce a finite attack speed.
    #[error("weapon delay {delay} for {class} wielding {category} must be positive and finite")]
    InvalidWeaponDelay {
        class: CharacterClass,
        category: WeaponCategory,
        delay: f64,
    },

    /// Base level is 0, or so high its stat budget does not fit in a `u32`.
    #[error("base level {level} is out of range")]
    InvalidLevel { level: u32 },

    /// Stat requirement is negative or not a number.
    #[error("{name} must be a non-negative finite number (got {value})")]
    InvalidThreshold { name: &'static str, value: f64 },

    /// A combat bonus lies outside the range its formula is defined on.
    #[error("combat bonus {name} is out of range (got {value})")]
    InvalidBonus { name: &'static str, value: f64 },

    /// Weapon damage modifier is negative or not a number.
    #[error("weapon damage modifier must be a non-negative finite number (got {value})")]
    InvalidDamageModifier { value: f64 },

    /// A candidate source produced nothing to choose from.
    #[error("no candidate distributions to select from")]
    NoCandidates,
}

impl PlanningError for PlanError {
    fn severity(&self) -> ErrorSeverity {
        use PlanError::*;
        match self {
            // Rule tables cannot describe the character - nothing to search
            MissingWeaponDelay { .. } | InvalidWeaponDelay { .. } => ErrorSeverity::Fatal,

            InvalidLevel { .. }
            | InvalidThreshold { .. }
            | InvalidBonus { .. }
            | InvalidDamageModifier { .. }
            | NoCandidates => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use PlanError::*;
        match self {
            MissingWeaponDelay { .. } => "PLAN_MISSING_WEAPON_DELAY",
            InvalidWeaponDelay { .. } => "PLAN_INVALID_WEAPON_DELAY",
            InvalidLevel { .. } => "PLAN_INVALID_LEVEL",
            InvalidThreshold { .. } => "PLAN_INVALID_THRESHOLD",
            InvalidBonus { .. } => "PLAN_INVALID_BONUS",
            InvalidDamageModifier { .. } => "PLAN_INVALID_DAMAGE_MODIFIER",
            NoCandidates => "PLAN_NO_CANDIDATES",
        }
    }
}
