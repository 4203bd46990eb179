//! Bug difficulty scaling
//!
//! Bugs get tougher the further the player has progressed and the deeper
//! into the map the encounter happens.

/// Base health of a level 0 bug
const BUG_BASE_HEALTH: i32 = 20;
/// Health added per level
const BUG_HEALTH_PER_LEVEL: i32 = 10;
/// Base attack of a level 0 bug
const BUG_BASE_ATTACK: i32 = 5;
/// Attack added per level
const BUG_ATTACK_PER_LEVEL: i32 = 5;

/// Level of a bug spawned in `room_index` after `features_collected` features.
///
/// 1 + features/2 + room/2, so the minimum level is 1.
pub fn bug_level(features_collected: usize, room_index: usize) -> u32 {
    (1 + features_collected / 2 + room_index / 2) as u32
}

/// Stat scaling for a bug of a given level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BugScaling {
    /// Bug level (at least 1)
    pub level: u32,
}

impl BugScaling {
    pub fn new(level: u32) -> Self {
        Self { level: level.max(1) }
    }

    /// Scaling for a bug spawned under the given progress
    pub fn for_progress(features_collected: usize, room_index: usize) -> Self {
        Self::new(bug_level(features_collected, room_index))
    }

    /// 20 + level * 10
    pub fn health(&self) -> i32 {
        BUG_BASE_HEALTH + self.level as i32 * BUG_HEALTH_PER_LEVEL
    }

    /// 5 + level * 5
    pub fn attack(&self) -> i32 {
        BUG_BASE_ATTACK + self.level as i32 * BUG_ATTACK_PER_LEVEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bug_level() {
        assert_eq!(bug_level(0, 0), 1);
        assert_eq!(bug_level(0, 1), 1); // Frontend Component on a fresh run
        assert_eq!(bug_level(0, 3), 2); // Database Schema on a fresh run
        assert_eq!(bug_level(2, 3), 3);
        assert_eq!(bug_level(5, 4), 5);
    }

    #[test]
    fn test_scaling_stats() {
        let s = BugScaling::new(1);
        assert_eq!(s.health(), 30);
        assert_eq!(s.attack(), 10);

        let s = BugScaling::for_progress(2, 3);
        assert_eq!(s.level, 3);
        assert_eq!(s.health(), 50);
        assert_eq!(s.attack(), 20);
    }

    #[test]
    fn test_level_floor() {
        assert_eq!(BugScaling::new(0).level, 1);
    }
}
