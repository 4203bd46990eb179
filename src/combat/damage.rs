//! Damage rolls
//!
//! Every hit is a uniform roll around the attacker's attack power.

use rand::Rng;

/// Player hits land within attack ± 5
pub const PLAYER_ROLL_SPREAD: i32 = 5;
/// Bug hits land within attack ± 3
pub const BUG_ROLL_SPREAD: i32 = 3;

/// Roll damage uniformly in `[attack - spread, attack + spread]` (inclusive).
///
/// Rolls below zero count as zero.
pub fn roll_damage(attack: i32, spread: i32, rng: &mut impl Rng) -> i32 {
    let spread = spread.abs();
    rng.gen_range(attack - spread..=attack + spread).max(0)
}

/// Damage of one player strike
pub fn roll_player_damage(attack: i32, rng: &mut impl Rng) -> i32 {
    roll_damage(attack, PLAYER_ROLL_SPREAD, rng)
}

/// Damage of one bug retaliation
pub fn roll_bug_damage(attack: i32, rng: &mut impl Rng) -> i32 {
    roll_damage(attack, BUG_ROLL_SPREAD, rng)
}
