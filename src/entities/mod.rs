//! Player and bug creation

pub mod bugs;
pub mod player;
pub mod vitals;

pub use bugs::{spawn_bug, Bug};
pub use player::Player;
pub use vitals::Vitals;
