//! World representation: the room graph

pub mod map;

pub use map::{reachable_from, Direction, Map, Room, RoomContent};
