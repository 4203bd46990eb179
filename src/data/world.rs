//! World templates
//!
//! The map layout, feature pool and bug names are data. The default world
//! lives in `assets/data/world.ron` and is compiled into the binary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::world::Direction;

/// The default world, embedded at build time
pub const DEFAULT_WORLD_RON: &str = include_str!("../../assets/data/world.ron");

/// Static description of a world, before feature names are assigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldTemplate {
    /// Room the player starts in
    #[serde(default)]
    pub start_room: usize,
    /// Rooms; exits refer to positions in this list
    pub rooms: Vec<RoomTemplate>,
    /// Names handed out to unnamed feature slots, in order
    #[serde(default)]
    pub feature_pool: Vec<String>,
    /// Names a spawned bug is picked from
    #[serde(default)]
    pub bug_names: Vec<String>,
}

/// A room as written in the data file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomTemplate {
    pub name: String,
    #[serde(default)]
    pub exits: BTreeMap<Direction, usize>,
    #[serde(default)]
    pub content: ContentTemplate,
}

/// Initial content marker of a room
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentTemplate {
    #[default]
    Empty,
    Bug,
    /// Feature named from the pool at game start
    Feature,
    /// Feature with a reserved name
    NamedFeature(String),
}

impl WorldTemplate {
    /// Parse a template from RON text
    pub fn from_ron(source: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(source)
    }
}
