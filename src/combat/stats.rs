//! Combatant stats.

use serde::{Deserialize, Serialize};

/// Mutable combat stats.
///
/// Health is not clamped at zero by effects: it may transiently read
/// negative until the encounter loop runs its once-per-tick defeat
/// check. Only card effects and limit-break attacks mutate these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub health: i32,
    pub max_health: i32,
    pub attack_power: i32,
    pub defense: i32,
}

impl Stats {
    /// Create stats at full health with no defense.
    #[must_use]
    pub fn new(max_health: i32, attack_power: i32) -> Self {
        Self {
            health: max_health,
            max_health,
            attack_power,
            defense: 0,
        }
    }

    /// Defeated at zero or below.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Restore health, clamped at max.
    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).min(self.max_health);
    }
}
