//! Combat system

pub mod damage;
pub mod encounter;

pub use damage::{roll_bug_damage, roll_damage, roll_player_damage, BUG_ROLL_SPREAD, PLAYER_ROLL_SPREAD};
pub use encounter::Encounter;
