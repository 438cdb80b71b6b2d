//! Core Stats - the six purchasable attributes.
//!
//! Core stats (STR, AGI, VIT, INT, DEX, LUK) are the only values the optimizer
//! chooses. Every other number (evasion, accuracy, attack speed, damage) is
//! derived from them together with the fixed character inputs.

use core::fmt;
use core::ops::Index;

use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};

use super::cost::cumulative_cost;

/// Value every attribute starts at. Reaching it costs nothing.
pub const INITIAL_STAT: u8 = 1;

/// Hard cap for a single attribute.
pub const MAXIMUM_STAT: u8 = 99;

/// Number of attribute dimensions.
pub const ATTRIBUTE_COUNT: usize = 6;

/// The six core attributes, in enumeration order.
///
/// - **STR** (Strength): flat attack
/// - **AGI** (Agility): evasion and attack speed
/// - **VIT** (Vitality): survivability, no effect on damage output
/// - **INT** (Intelligence): spell power, no effect on damage output
/// - **DEX** (Dexterity): accuracy, attack speed, minor attack
/// - **LUK** (Luck): minor attack
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumCount, EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attribute {
    Str,
    Agi,
    Vit,
    Int,
    Dex,
    Luk,
}

impl Attribute {
    /// The dimension whose value is derived from the leftover budget instead of
    /// being enumerated.
    pub const COLLAPSED: Attribute = Attribute::Luk;

    /// Position of this attribute inside an [`Attributes`] tuple.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A complete assignment of values to the six attributes.
///
/// Order is always STR, AGI, VIT, INT, DEX, LUK. The type is `Copy`; every
/// modification produces a new tuple, so a tuple handed to a scorer can never
/// change afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes([u8; ATTRIBUTE_COUNT]);

impl Attributes {
    /// All attributes at [`INITIAL_STAT`].
    pub const INITIAL: Self = Self([INITIAL_STAT; ATTRIBUTE_COUNT]);

    /// Create a tuple from raw values in STR, AGI, VIT, INT, DEX, LUK order.
    pub const fn new(values: [u8; ATTRIBUTE_COUNT]) -> Self {
        Self(values)
    }

    /// Value of a single attribute.
    pub const fn get(&self, attribute: Attribute) -> u8 {
        self.0[attribute.index()]
    }

    /// Copy of this tuple with one attribute replaced.
    #[must_use]
    pub fn with(mut self, attribute: Attribute, value: u8) -> Self {
        self.0[attribute.index()] = value;
        self
    }

    /// Raw values in STR, AGI, VIT, INT, DEX, LUK order.
    pub const fn values(&self) -> [u8; ATTRIBUTE_COUNT] {
        self.0
    }

    /// Iterate `(attribute, value)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, u8)> + '_ {
        Attribute::iter().map(move |attribute| (attribute, self.get(attribute)))
    }

    /// Total stat points needed to raise every attribute from
    /// [`INITIAL_STAT`] to its current value.
    pub fn total_cost(&self) -> u32 {
        self.0.iter().map(|&value| cumulative_cost(value)).sum()
    }

    /// True if every value lies within `[INITIAL_STAT, MAXIMUM_STAT]`.
    pub fn is_within_caps(&self) -> bool {
        self.0
            .iter()
            .all(|value| (INITIAL_STAT..=MAXIMUM_STAT).contains(value))
    }
}

impl Default for Attributes {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl Index<Attribute> for Attributes {
    type Output = u8;

    fn index(&self, attribute: Attribute) -> &u8 {
        &self.0[attribute.index()]
    }
}

impl From<[u8; ATTRIBUTE_COUNT]> for Attributes {
    fn from(values: [u8; ATTRIBUTE_COUNT]) -> Self {
        Self::new(values)
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [s, a, v, i, d, l] = self.0;
        write!(f, "({s}, {a}, {v}, {i}, {d}, {l})")
    }
}
