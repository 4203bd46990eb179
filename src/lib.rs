//! Code Debugger - a software engineering text adventure
//!
//! Explore the codebase, squash bugs, collect features and ship the
//! product before your system crashes.

pub mod combat;
pub mod data;
pub mod entities;
pub mod game;
pub mod progression;
pub mod world;

// Re-export commonly used types
pub use data::{DataError, DataManager};
pub use game::{Game, GameError, GameState};
pub use world::Map;
