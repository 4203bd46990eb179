//! World data loader
//!
//! Parses and validates a world template and keeps the resolved rooms as the
//! immutable template every run copies from.

use std::collections::HashSet;

use thiserror::Error;

use super::world::{ContentTemplate, WorldTemplate, DEFAULT_WORLD_RON};
use crate::world::{reachable_from, Direction, Map, Room, RoomContent};

/// Problems with world data
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to parse world data: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("world has no rooms")]
    NoRooms,
    #[error("start room {start} is outside the map ({rooms} rooms)")]
    StartOutOfBounds { start: usize, rooms: usize },
    #[error("room '{room}' has a {direction:?} exit to missing room {target}")]
    DanglingExit {
        room: String,
        direction: Direction,
        target: usize,
    },
    #[error("world has bug rooms but no bug names")]
    NoBugNames,
    #[error("feature pool ran out of names ({needed} needed, {available} available)")]
    FeaturePoolExhausted { needed: usize, available: usize },
    #[error("feature '{0}' is placed more than once")]
    DuplicateFeature(String),
    #[error("world places no features, so it cannot be won")]
    NoFeatures,
    #[error("feature in room '{0}' cannot be reached from the start room")]
    UnreachableFeature(String),
}

/// Validated world data shared by every run
#[derive(Debug, Clone)]
pub struct DataManager {
    /// Rooms with feature names resolved; never mutated
    rooms: Vec<Room>,
    start_room: usize,
    bug_names: Vec<String>,
}

impl DataManager {
    /// Load the embedded default world
    pub fn load() -> Result<Self, DataError> {
        Self::from_ron(DEFAULT_WORLD_RON)
    }

    /// Load a world from RON text
    pub fn from_ron(source: &str) -> Result<Self, DataError> {
        let template = WorldTemplate::from_ron(source)?;
        Self::from_template(template)
    }

    /// Validate a template and resolve its feature names
    pub fn from_template(template: WorldTemplate) -> Result<Self, DataError> {
        let room_count = template.rooms.len();
        if room_count == 0 {
            return Err(DataError::NoRooms);
        }
        if template.start_room >= room_count {
            return Err(DataError::StartOutOfBounds {
                start: template.start_room,
                rooms: room_count,
            });
        }

        for room in &template.rooms {
            if let Some((&direction, &target)) =
                room.exits.iter().find(|(_, target)| **target >= room_count)
            {
                return Err(DataError::DanglingExit {
                    room: room.name.clone(),
                    direction,
                    target,
                });
            }
        }

        let has_bugs = template
            .rooms
            .iter()
            .any(|r| r.content == ContentTemplate::Bug);
        if has_bugs && template.bug_names.is_empty() {
            return Err(DataError::NoBugNames);
        }

        let rooms = resolve_rooms(&template)?;

        let reachable = reachable_from(&rooms, template.start_room);
        let mut feature_count = 0;
        for (index, room) in rooms.iter().enumerate() {
            if room.content.feature_name().is_some() {
                feature_count += 1;
                if !reachable[index] {
                    return Err(DataError::UnreachableFeature(room.name.clone()));
                }
            }
        }
        if feature_count == 0 {
            return Err(DataError::NoFeatures);
        }

        log::info!(
            "Loaded world: {} rooms, {} features, {} bug names",
            rooms.len(),
            feature_count,
            template.bug_names.len()
        );

        Ok(Self {
            rooms,
            start_room: template.start_room,
            bug_names: template.bug_names,
        })
    }

    /// Fresh working copy of the map for a new run
    pub fn new_map(&self) -> Map {
        Map::new(self.rooms.clone(), self.start_room)
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn bug_names(&self) -> &[String] {
        &self.bug_names
    }
}

/// Turn room templates into rooms, naming unnamed features from the pool.
///
/// Pool names already reserved by a `NamedFeature` are skipped.
fn resolve_rooms(template: &WorldTemplate) -> Result<Vec<Room>, DataError> {
    let reserved: HashSet<&str> = template
        .rooms
        .iter()
        .filter_map(|r| match &r.content {
            ContentTemplate::NamedFeature(name) => Some(name.as_str()),
            _ => None,
        })
        .collect();

    let mut pool_seen = HashSet::new();
    let pool: Vec<&String> = template
        .feature_pool
        .iter()
        .filter(|&name| !reserved.contains(name.as_str()) && pool_seen.insert(name.as_str()))
        .collect();

    let needed = template
        .rooms
        .iter()
        .filter(|r| r.content == ContentTemplate::Feature)
        .count();
    if needed > pool.len() {
        return Err(DataError::FeaturePoolExhausted {
            needed,
            available: pool.len(),
        });
    }

    let mut pool = pool.into_iter();
    let mut placed = HashSet::new();
    let mut rooms = Vec::with_capacity(template.rooms.len());

    for room in &template.rooms {
        let content = match &room.content {
            ContentTemplate::Empty => RoomContent::Empty,
            ContentTemplate::Bug => RoomContent::Bug,
            ContentTemplate::NamedFeature(name) => RoomContent::Feature(name.clone()),
            ContentTemplate::Feature => match pool.next() {
                Some(name) => RoomContent::Feature(name.clone()),
                None => {
                    return Err(DataError::FeaturePoolExhausted {
                        needed,
                        available: 0,
                    })
                }
            },
        };

        if let RoomContent::Feature(name) = &content {
            if !placed.insert(name.clone()) {
                return Err(DataError::DuplicateFeature(name.clone()));
            }
        }

        rooms.push(Room {
            name: room.name.clone(),
            exits: room.exits.clone(),
            content,
        });
    }

    Ok(rooms)
}
