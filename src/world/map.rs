//! Room graph
//!
//! The working copy of the world for one run: rooms, their directed exits
//! and what each room currently holds.

use std::collections::{BTreeMap, VecDeque};

use serde::{Deserialize, Serialize};

/// Compass direction of an exit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Parse a direction from a letter or a full word (case-insensitive)
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "n" | "north" => Some(Direction::North),
            "e" | "east" => Some(Direction::East),
            "s" | "south" => Some(Direction::South),
            "w" | "west" => Some(Direction::West),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }
}

/// What a room currently holds
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RoomContent {
    #[default]
    Empty,
    /// Bug marker; the bug itself is spawned on first contact
    Bug,
    /// A collectible feature
    Feature(String),
}

impl RoomContent {
    pub fn is_bug(&self) -> bool {
        matches!(self, RoomContent::Bug)
    }

    pub fn feature_name(&self) -> Option<&str> {
        match self {
            RoomContent::Feature(name) => Some(name),
            _ => None,
        }
    }
}

/// A node of the map graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: String,
    /// Direction -> room index
    pub exits: BTreeMap<Direction, usize>,
    pub content: RoomContent,
}

impl Room {
    pub fn exit(&self, direction: Direction) -> Option<usize> {
        self.exits.get(&direction).copied()
    }

    /// "[N], [E]" or "None (Dead End)"
    pub fn exit_summary(&self) -> String {
        if self.exits.is_empty() {
            return "None (Dead End)".to_string();
        }
        self.exits
            .keys()
            .map(|d| format!("[{}]", d.letter()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Which rooms can be reached from `start` by following exits.
///
/// Exits pointing outside `rooms` are skipped.
pub fn reachable_from(rooms: &[Room], start: usize) -> Vec<bool> {
    let mut seen = vec![false; rooms.len()];
    if start >= rooms.len() {
        return seen;
    }

    let mut queue = VecDeque::new();
    seen[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for &next in rooms[current].exits.values() {
            if next < rooms.len() && !seen[next] {
                seen[next] = true;
                queue.push_back(next);
            }
        }
    }

    seen
}

/// Working map for one run
#[derive(Debug, Clone)]
pub struct Map {
    rooms: Vec<Room>,
    /// Where the player starts
    pub start_room: usize,
    /// Features placed at the start of the run; collecting all of them wins
    total_features: usize,
}

impl Map {
    /// Build a working map from a copy of the template rooms
    pub fn new(rooms: Vec<Room>, start_room: usize) -> Self {
        let total_features = rooms
            .iter()
            .filter(|r| r.content.feature_name().is_some())
            .count();
        Self {
            rooms,
            start_room,
            total_features,
        }
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, index: usize) -> Option<&Room> {
        self.rooms.get(index)
    }

    pub fn room_mut(&mut self, index: usize) -> Option<&mut Room> {
        self.rooms.get_mut(index)
    }

    pub fn total_features(&self) -> usize {
        self.total_features
    }

    /// Features still lying around
    pub fn remaining_features(&self) -> usize {
        self.rooms
            .iter()
            .filter(|r| r.content.feature_name().is_some())
            .count()
    }
}
