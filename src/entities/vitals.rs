//! Shared combat vitals
//!
//! Health and attack power carried by both the player and bugs.

/// Name, health pool and attack power of anything that can fight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vitals {
    pub name: String,
    pub health: i32,
    pub max_health: i32,
    pub attack: i32,
}

impl Vitals {
    /// Create vitals at full health
    pub fn new(name: impl Into<String>, max_health: i32, attack: i32) -> Self {
        Self {
            name: name.into(),
            health: max_health,
            max_health,
            attack,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Apply damage, never dropping below zero. Returns the health actually lost.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let actual = amount.max(0).min(self.health);
        self.health -= actual;
        actual
    }

    /// Heal up to max health. Returns the health actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let actual = amount.max(0).min(self.max_health - self.health);
        self.health += actual;
        actual
    }

    /// Permanently raise max health (current health is not touched)
    pub fn raise_max_health(&mut self, amount: i32) {
        self.max_health += amount.max(0);
    }

    /// "current/max"
    pub fn health_display(&self) -> String {
        format!("{}/{}", self.health, self.max_health)
    }

    /// Log line for a hit of `amount` that has already been applied
    pub fn hit_report(&self, amount: i32) -> String {
        format!(
            "[{}] takes {} damage! Health: {}",
            self.name,
            amount,
            self.health_display()
        )
    }

    pub fn elimination_notice(&self) -> String {
        format!("--- [{}] has been eliminated! ---", self.name)
    }
}
