//! Encounter state machine
//!
//! Tracks the bug the player is currently fighting. A room holding a bug
//! marker gets exactly one live bug at a time; spawning goes through
//! [`Encounter::ensure_for_room`] so repeated looks and attacks never roll a
//! second one.

use crate::entities::Bug;

/// Combat state for the current room
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Encounter {
    /// Nothing to fight
    #[default]
    NoBug,
    /// A live bug in `room`
    Active { room: usize, bug: Bug },
    /// The last bug, squashed in `room`
    Defeated { room: usize, name: String },
}

impl Encounter {
    /// True if a live bug is blocking `room`
    pub fn is_active_in(&self, room: usize) -> bool {
        matches!(self, Encounter::Active { room: r, bug } if *r == room && bug.vitals.is_alive())
    }

    pub fn active_bug(&self) -> Option<&Bug> {
        match self {
            Encounter::Active { bug, .. } => Some(bug),
            _ => None,
        }
    }

    pub fn active_bug_mut(&mut self) -> Option<&mut Bug> {
        match self {
            Encounter::Active { bug, .. } => Some(bug),
            _ => None,
        }
    }

    /// Make sure a room holding a bug marker has a live bug.
    ///
    /// Calls `spawn` only when `room_has_bug` is set and no live bug is
    /// active in `room`. Returns true if a bug was spawned.
    pub fn ensure_for_room(
        &mut self,
        room: usize,
        room_has_bug: bool,
        spawn: impl FnOnce() -> Bug,
    ) -> bool {
        if !room_has_bug || self.is_active_in(room) {
            return false;
        }

        let bug = spawn();
        log::debug!("Encounter: {} -> Active in room {} ({})", self.label(), room, bug.vitals.name);
        *self = Encounter::Active { room, bug };
        true
    }

    /// Move a dead active bug to `Defeated`. Returns the bug and its room.
    pub fn resolve_defeat(&mut self) -> Option<(usize, Bug)> {
        match self {
            Encounter::Active { bug, .. } if !bug.vitals.is_alive() => {}
            _ => return None,
        }

        let Encounter::Active { room, bug } = std::mem::take(self) else {
            return None;
        };
        log::debug!("Encounter: Active -> Defeated in room {}", room);
        *self = Encounter::Defeated {
            room,
            name: bug.vitals.name.clone(),
        };
        Some((room, bug))
    }

    /// Short state name for logs
    pub fn label(&self) -> &'static str {
        match self {
            Encounter::NoBug => "NoBug",
            Encounter::Active { .. } => "Active",
            Encounter::Defeated { .. } => "Defeated",
        }
    }
}
