//! The player character

use serde::{Deserialize, Serialize};

use super::Fighter;
use crate::items::Inventory;
use crate::world::Position;

/// Starting and maximum health
pub const PLAYER_MAX_HP: i32 = 100;
/// Starting attack power
pub const PLAYER_ATTACK_POWER: i32 = 10;

/// The adventurer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub fighter: Fighter,
    pub position: Position,
    pub inventory: Inventory,
}

impl Player {
    /// Create a fresh adventurer at the origin
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            fighter: Fighter::new(name, PLAYER_MAX_HP, PLAYER_ATTACK_POWER),
            position: Position::new(0, 0),
            inventory: Inventory::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.fighter.name
    }

    pub fn hp(&self) -> i32 {
        self.fighter.hp
    }

    pub fn is_alive(&self) -> bool {
        self.fighter.is_alive()
    }
}
