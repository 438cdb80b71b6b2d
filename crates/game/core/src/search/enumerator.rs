//! Lazy enumeration of stat distributions.
//!
//! Walks the free dimensions (STR..DEX) like an odometer in lexicographic
//! order, each from [`INITIAL_STAT`] up to whatever the remaining budget
//! still affords. The collapsed dimension (LUK) is never enumerated: it
//! receives every point left after the free prefix is fixed. Because the
//! performance model is non-decreasing in every attribute, a tuple with a
//! partially spent LUK can never beat the one yielded here.

use crate::stats::{
    ATTRIBUTE_COUNT, Attribute, Attributes, INITIAL_STAT, MAXIMUM_STAT, cost_of_next_point,
    max_affordable,
};

/// Number of enumerated dimensions.
const FREE_DIMENSIONS: usize = ATTRIBUTE_COUNT - 1;

/// Iterator over every maximal stat distribution within a budget.
///
/// Yields each distinct free prefix exactly once, in ascending
/// lexicographic order of `(STR, AGI, VIT, INT, DEX)`. The sequence is
/// finite and cannot be restarted.
#[derive(Clone, Debug)]
pub struct StatDistributions {
    budget: u32,
    prefix: [u8; FREE_DIMENSIONS],
    /// `remaining[i]` is the budget left before dimension `i` is assigned;
    /// `remaining[FREE_DIMENSIONS]` is what the collapsed dimension receives.
    remaining: [u32; FREE_DIMENSIONS + 1],
    state: Cursor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cursor {
    Start,
    Running,
    Exhausted,
}

impl StatDistributions {
    pub fn new(budget: u32) -> Self {
        Self {
            budget,
            prefix: [INITIAL_STAT; FREE_DIMENSIONS],
            remaining: [budget; FREE_DIMENSIONS + 1],
            state: Cursor::Start,
        }
    }

    /// Budget the distributions are drawn from.
    pub const fn budget(&self) -> u32 {
        self.budget
    }

    /// Move to the next affordable prefix.
    ///
    /// Raises the deepest dimension that can still buy a point and resets
    /// every dimension after it to [`INITIAL_STAT`]. Returns `false` once no
    /// dimension can be raised.
    fn advance(&mut self) -> bool {
        for dimension in (0..FREE_DIMENSIONS).rev() {
            let value = self.prefix[dimension];
            let available = self.remaining[dimension + 1];
            let cost = cost_of_next_point(value);

            if value >= MAXIMUM_STAT || available < cost {
                continue;
            }

            self.prefix[dimension] = value + 1;
            self.remaining[dimension + 1] = available - cost;
            for deeper in dimension + 1..FREE_DIMENSIONS {
                self.prefix[deeper] = INITIAL_STAT;
                self.remaining[deeper + 1] = self.remaining[deeper];
            }
            return true;
        }
        false
    }

    fn current(&self) -> Attributes {
        let mut values = [INITIAL_STAT; ATTRIBUTE_COUNT];
        values[..FREE_DIMENSIONS].copy_from_slice(&self.prefix);
        values[Attribute::COLLAPSED.index()] =
            max_affordable(self.remaining[FREE_DIMENSIONS]).value;
        Attributes::new(values)
    }
}

impl Iterator for StatDistributions {
    type Item = Attributes;

    fn next(&mut self) -> Option<Attributes> {
        match self.state {
            Cursor::Exhausted => return None,
            Cursor::Start => self.state = Cursor::Running,
            Cursor::Running => {
                if !self.advance() {
                    self.state = Cursor::Exhausted;
                    return None;
                }
            }
        }
        Some(self.current())
    }
}

impl core::iter::FusedIterator for StatDistributions {}

/// Enumerate every maximal distribution of `budget` stat points.
pub fn stat_distributions(budget: u32) -> StatDistributions {
    StatDistributions::new(budget)
}
