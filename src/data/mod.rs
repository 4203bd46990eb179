//! Game data
//!
//! The world layout, feature pool and bug names are loaded from RON data
//! and validated before a game can start.

pub mod loader;
pub mod world;

pub use loader::{DataError, DataManager};
pub use world::{ContentTemplate, RoomTemplate, WorldTemplate, DEFAULT_WORLD_RON};
