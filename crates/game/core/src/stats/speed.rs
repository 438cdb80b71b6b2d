//! Attack speed.
//!
//! Formulas:
//! - ASPD = 200 - (delay - (delay × AGI / 25 + delay × DEX / 100) / 10) × (1 - speed_mod)
//! - hits/s = 50 / (200 - ASPD)
//!
//! ASPD approaches 200 as the attack interval shrinks towards zero. An ASPD
//! of 200 or more has no meaningful hit rate and is reported as saturated.

/// ASPD at which the attack interval reaches zero.
pub const MAX_ATTACK_SPEED: f64 = 200.0;

/// Hits per second at an interval of one ASPD unit.
const HITS_PER_INTERVAL: f64 = 50.0;

/// Attack speed for a weapon delay and the speed-relevant attributes.
pub fn attack_speed(weapon_delay: f64, agi: u8, dex: u8, speed_modifier: f64) -> f64 {
    let agi = f64::from(agi);
    let dex = f64::from(dex);
    let reduction = ((weapon_delay * agi / 25.0) + (weapon_delay * dex / 100.0)) / 10.0;

    MAX_ATTACK_SPEED - (weapon_delay - reduction) * (1.0 - speed_modifier)
}

/// Attacks per second at `attack_speed`.
///
/// Returns `None` when the speed is saturated (`attack_speed >= 200`).
pub fn hits_per_second(attack_speed: f64) -> Option<f64> {
    let interval = MAX_ATTACK_SPEED - attack_speed;
    (interval > 0.0).then(|| HITS_PER_INTERVAL / interval)
}
