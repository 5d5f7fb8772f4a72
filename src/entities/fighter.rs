//! Health and attack shared by everything that can fight

use serde::{Deserialize, Serialize};

/// Anything with a name, hit points and an attack roll
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fighter {
    pub name: String,
    /// Current health; may dip below zero on the killing blow
    pub hp: i32,
    /// Inclusive upper bound of a damage roll
    pub attack_power: i32,
}

impl Fighter {
    pub fn new(name: impl Into<String>, hp: i32, attack_power: i32) -> Self {
        Self {
            name: name.into(),
            hp,
            attack_power: attack_power.max(0),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Subtract damage, returning true if this killed the fighter
    pub fn take_damage(&mut self, amount: i32) -> bool {
        let was_alive = self.is_alive();
        self.hp -= amount;
        was_alive && !self.is_alive()
    }

    /// Restore health up to `cap`, returning how much was actually gained
    pub fn heal(&mut self, amount: i32, cap: i32) -> i32 {
        let before = self.hp;
        self.hp = (self.hp + amount).min(cap).max(before);
        self.hp - before
    }
}
