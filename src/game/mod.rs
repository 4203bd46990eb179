//! Game module - command loop state and handlers

mod command;
mod error;
mod state;

pub use command::{help_lines, Command};
pub use error::GameError;
pub use state::{Game, GameMessage, GameState, MessageCategory, BUG_KILL_HEAL};
