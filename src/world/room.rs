//! Room contents

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entities::Monster;
use crate::items::Item;

/// Description left behind once a fountain has been drunk dry
pub const DRY_FOUNTAIN: &str = "The fountain has been used and is now dry.";

/// Room categories. Fountains and traps decay to `Normal` after one use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    Normal,
    Treasure,
    Fountain,
    Trap,
}

impl RoomType {
    pub const ALL: [RoomType; 4] = [
        RoomType::Normal,
        RoomType::Treasure,
        RoomType::Fountain,
        RoomType::Trap,
    ];
}

/// A single cell of the dungeon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub description: String,
    pub room_type: RoomType,
    pub monster: Option<Monster>,
    pub item: Option<Item>,
}

impl Room {
    /// An empty room of the given type
    pub fn new(room_type: RoomType, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            room_type,
            monster: None,
            item: None,
        }
    }

    pub fn with_monster(mut self, monster: Monster) -> Self {
        self.monster = Some(monster);
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.item = Some(item);
        self
    }

    pub fn is_trap(&self) -> bool {
        self.room_type == RoomType::Trap
    }

    pub fn is_fountain(&self) -> bool {
        self.room_type == RoomType::Fountain
    }

    /// Disarm a trap. Returns false if this wasn't a trap.
    pub(crate) fn spring_trap(&mut self) -> bool {
        if !self.is_trap() {
            return false;
        }
        self.room_type = RoomType::Normal;
        true
    }

    /// Use up a fountain. Returns false if this wasn't a fountain.
    pub(crate) fn dry_up(&mut self) -> bool {
        if !self.is_fountain() {
            return false;
        }
        self.room_type = RoomType::Normal;
        self.description = DRY_FOUNTAIN.to_string();
        true
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)?;
        if let Some(monster) = &self.monster {
            write!(f, "\nYou see a {} here.", monster.name())?;
        }
        if let Some(item) = self.item {
            write!(f, "\nYou see {} on the ground.", item)?;
        }
        Ok(())
    }
}
