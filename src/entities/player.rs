//! The player: "The Developer"

use super::vitals::Vitals;

pub const PLAYER_NAME: &str = "The Developer";
pub const PLAYER_HEALTH: i32 = 100;
pub const PLAYER_ATTACK: i32 = 15;

/// Permanent max health gained per collected feature
pub const FEATURE_MAX_HEALTH_BONUS: i32 = 5;
/// Immediate heal per collected feature
pub const FEATURE_HEAL: i32 = 10;

/// The player character
#[derive(Debug, Clone)]
pub struct Player {
    pub vitals: Vitals,
    /// Collected features, in pickup order
    inventory: Vec<String>,
    /// Index of the current room
    pub location: usize,
}

impl Player {
    /// Create a fresh player standing in `location`
    pub fn new(location: usize) -> Self {
        Self {
            vitals: Vitals::new(PLAYER_NAME, PLAYER_HEALTH, PLAYER_ATTACK),
            inventory: Vec::new(),
            location,
        }
    }

    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    /// Always equal to the inventory size
    pub fn features_collected(&self) -> usize {
        self.inventory.len()
    }

    /// Implement a feature: store it, raise max health, then heal
    pub fn add_feature(&mut self, feature: impl Into<String>) {
        self.inventory.push(feature.into());
        self.vitals.raise_max_health(FEATURE_MAX_HEALTH_BONUS);
        self.vitals.heal(FEATURE_HEAL);
    }

    /// Lines of the status report
    pub fn status_lines(&self) -> Vec<String> {
        let inventory = if self.inventory.is_empty() {
            "Empty".to_string()
        } else {
            self.inventory.join(", ")
        };

        vec![
            "-".repeat(30),
            format!("| STATUS REPORT: {}", self.vitals.name),
            format!("| Health: {}", self.vitals.health_display()),
            format!("| Attack Power: {}", self.vitals.attack),
            format!("| Features Collected: {}", self.features_collected()),
            format!("| Inventory: {}", inventory),
            "-".repeat(30),
        ]
    }
}
