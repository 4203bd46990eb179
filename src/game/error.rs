//! Runtime faults raised while handling a command
//!
//! Mistakes in player input are not errors; they get a feedback message.
//! These cover game bookkeeping that has gone out of sync.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("room {index} does not exist (map has {rooms} rooms)")]
    RoomOutOfBounds { index: usize, rooms: usize },
    #[error("room {room} holds a bug but no encounter is active")]
    EncounterMissing { room: usize },
}
