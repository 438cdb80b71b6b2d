//! Stat point budget.
//!
//! Characters start with a fixed allowance and earn `level / 5 + 3` points
//! for every level-up from level 1 to their current base level.

/// Starting allowance for a regular character.
pub const INITIAL_STAT_POINTS: u32 = 48;

/// Starting allowance for a transcended character.
pub const INITIAL_STAT_POINTS_TRANSCENDED: u32 = 100;

/// Points available before any level-up.
pub const fn initial_stat_points(transcended: bool) -> u32 {
    if transcended {
        INITIAL_STAT_POINTS_TRANSCENDED
    } else {
        INITIAL_STAT_POINTS
    }
}

/// Points earned by levelling from 1 up to `base_level`.
///
/// Level `n → n + 1` grants `n / 5 + 3` points. Level 1 (or 0) earns nothing.
/// Returns `None` if the total does not fit in a `u32`.
pub fn checked_level_up_stat_points(base_level: u32) -> Option<u32> {
    // Closed form of Σ_{n=1}^{levels} (n / 5 + 3), evaluated in u64.
    let levels = u64::from(base_level.saturating_sub(1));
    let blocks = levels / 5;
    let partial = levels % 5;
    let per_block = 5 * blocks * blocks.saturating_sub(1) / 2 + blocks * (partial + 1);

    u32::try_from(per_block + 3 * levels).ok()
}

/// Total stat points a character can distribute, or `None` on overflow.
pub fn checked_stat_points(base_level: u32, transcended: bool) -> Option<u32> {
    checked_level_up_stat_points(base_level)?.checked_add(initial_stat_points(transcended))
}

/// Total stat points a character can distribute.
///
/// Saturates at `u32::MAX` for levels whose budget does not fit; planning
/// rejects those levels up front.
pub fn stat_points(base_level: u32, transcended: bool) -> u32 {
    checked_stat_points(base_level, transcended).unwrap_or(u32::MAX)
}
