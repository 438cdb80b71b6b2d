//! Stat point cost schedule.
//!
//! Raising an attribute gets more expensive every ten points:
//!
//! ```text
//! cost_of_point(n) = (n - 2) / 10 + 2     for n >= 2
//! cost_of_point(1) = 0                    (attributes start at 1)
//! ```

use super::core::{INITIAL_STAT, MAXIMUM_STAT};

const TABLE_LEN: usize = MAXIMUM_STAT as usize + 1;

/// `CUMULATIVE_COSTS[v]` is the price of raising an attribute from 1 to `v`.
const CUMULATIVE_COSTS: [u32; TABLE_LEN] = {
    let mut table = [0; TABLE_LEN];
    let mut value = INITIAL_STAT as usize + 1;
    while value < TABLE_LEN {
        table[value] = table[value - 1] + cost_of_point(value as u8);
        value += 1;
    }
    table
};

/// Cost of the point that brings an attribute from `value - 1` to `value`.
pub const fn cost_of_point(value: u8) -> u32 {
    if value <= INITIAL_STAT {
        return 0;
    }
    (value as u32 - 2) / 10 + 2
}

/// Cost of raising an attribute currently at `value` by one.
pub const fn cost_of_next_point(value: u8) -> u32 {
    cost_of_point(value.saturating_add(1))
}

/// Total cost of raising an attribute from [`INITIAL_STAT`] to `value`.
pub fn cumulative_cost(value: u8) -> u32 {
    if (value as usize) < TABLE_LEN {
        return CUMULATIVE_COSTS[value as usize];
    }
    // Past the cap: only reachable for tuples that are already invalid.
    CUMULATIVE_COSTS[MAXIMUM_STAT as usize]
        + (MAXIMUM_STAT + 1..=value).map(cost_of_point).sum::<u32>()
}

/// Highest value one attribute can reach from [`INITIAL_STAT`] with a budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Affordable {
    /// Highest reachable value, capped at [`MAXIMUM_STAT`].
    pub value: u8,
    /// Budget left after buying every point up to `value`.
    pub leftover: u32,
}

/// Spend as much of `budget` as possible on a single attribute.
///
/// The result satisfies `leftover < cost_of_next_point(value)` unless the
/// attribute hit [`MAXIMUM_STAT`].
pub fn max_affordable(budget: u32) -> Affordable {
    // Index 0 of the slice is value 1, which is always affordable.
    let reachable = CUMULATIVE_COSTS[INITIAL_STAT as usize..].partition_point(|&cost| cost <= budget);
    let value = reachable as u8;

    Affordable {
        value,
        leftover: budget - CUMULATIVE_COSTS[value as usize],
    }
}
