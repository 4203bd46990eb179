//! Bug (enemy) creation
//!
//! Bugs are sized by their level and named from the world's bug name pool.

use rand::seq::SliceRandom;
use rand::Rng;

use super::vitals::Vitals;
use crate::progression::BugScaling;

/// Used only if the name pool is empty, which world validation rules out
pub const FALLBACK_BUG_NAME: &str = "Unknown Bug";

/// An enemy bug
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bug {
    pub vitals: Vitals,
    pub level: u32,
}

impl Bug {
    /// Announcement shown when the bug appears
    pub fn alert(&self) -> String {
        format!(
            "\n[BUG ALERT]: A Level {} {} has appeared!",
            self.level, self.vitals.name
        )
    }
}

/// Spawn a bug sized by `scaling` with a name picked uniformly from `names`
pub fn spawn_bug(scaling: BugScaling, names: &[String], rng: &mut impl Rng) -> Bug {
    let name = names
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| FALLBACK_BUG_NAME.to_string());

    log::info!("Spawned level {} bug '{}'", scaling.level, name);

    Bug {
        vitals: Vitals::new(name, scaling.health(), scaling.attack()),
        level: scaling.level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn names() -> Vec<String> {
        ["Runtime Error", "Segmentation Fault", "Off-by-One Loop", "Null Pointer"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_spawn_bug_stats() {
        let mut rng = StdRng::seed_from_u64(7);
        let bug = spawn_bug(BugScaling::new(1), &names(), &mut rng);
        assert_eq!(bug.level, 1);
        assert_eq!(bug.vitals.max_health, 30);
        assert_eq!(bug.vitals.health, 30);
        assert_eq!(bug.vitals.attack, 10);

        let bug = spawn_bug(BugScaling::new(3), &names(), &mut rng);
        assert_eq!(bug.vitals.max_health, 50);
        assert_eq!(bug.vitals.attack, 20);
    }

    #[test]
    fn test_spawn_bug_name_from_pool() {
        let pool = names();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let bug = spawn_bug(BugScaling::new(2), &pool, &mut rng);
            assert!(pool.contains(&bug.vitals.name));
        }
    }

    #[test]
    fn test_spawn_bug_empty_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        let bug = spawn_bug(BugScaling::new(1), &[], &mut rng);
        assert_eq!(bug.vitals.name, FALLBACK_BUG_NAME);
    }

    #[test]
    fn test_alert() {
        let mut rng = StdRng::seed_from_u64(3);
        let bug = spawn_bug(BugScaling::new(2), &["Null Pointer".to_string()], &mut rng);
        assert_eq!(bug.alert(), "\n[BUG ALERT]: A Level 2 Null Pointer has appeared!");
    }
}
