//! Command parsing
//!
//! One input line is `command [argument]`, trimmed and case-insensitive.

use crate::world::Direction;

/// A parsed player command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Look,
    Status,
    /// `None` when the direction is missing or not recognised
    Move(Option<Direction>),
    Attack,
    Collect,
    Quit,
    /// Anything else, lowercased
    Unknown(String),
}

impl Command {
    /// Parse one input line. Returns `None` for a blank line.
    pub fn parse(input: &str) -> Option<Self> {
        let line = input.trim().to_lowercase();
        let mut parts = line.split_whitespace();
        let command = parts.next()?;
        let argument = parts.next();

        let parsed = match command {
            "help" => Command::Help,
            "look" => Command::Look,
            "status" => Command::Status,
            "move" => Command::Move(argument.and_then(Direction::parse)),
            "attack" => Command::Attack,
            "collect" => Command::Collect,
            "quit" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        };
        Some(parsed)
    }
}

/// Lines of the help screen
pub fn help_lines() -> Vec<String> {
    vec![
        "-".repeat(30),
        "Available Commands:".to_string(),
        "  move [N/E/S/W]: Move in a direction.".to_string(),
        "  look: Check your current location and contents.".to_string(),
        "  attack: Engage a bug in combat.".to_string(),
        "  collect: Pick up a feature (item).".to_string(),
        "  status: Show player health, attack, and inventory.".to_string(),
        "  quit: Exit the game.".to_string(),
        "-".repeat(30),
    ]
}
