//! Monster table
//!
//! The dungeon has exactly three kinds of monster. Each spawned monster is
//! owned by the room it appeared in.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Fighter;

/// The fixed monster roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterKind {
    Goblin,
    GiantSpider,
    Skeleton,
}

impl MonsterKind {
    pub const ALL: [MonsterKind; 3] = [
        MonsterKind::Goblin,
        MonsterKind::GiantSpider,
        MonsterKind::Skeleton,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MonsterKind::Goblin => "goblin",
            MonsterKind::GiantSpider => "giant spider",
            MonsterKind::Skeleton => "skeleton",
        }
    }

    pub fn base_hp(self) -> i32 {
        match self {
            MonsterKind::Goblin => 30,
            MonsterKind::GiantSpider => 50,
            MonsterKind::Skeleton => 40,
        }
    }

    pub fn attack_power(self) -> i32 {
        match self {
            MonsterKind::Goblin => 5,
            MonsterKind::GiantSpider => 8,
            MonsterKind::Skeleton => 6,
        }
    }

    /// Create a fresh monster of this kind at full health
    pub fn spawn(self) -> Monster {
        Monster {
            kind: self,
            fighter: Fighter::new(self.name(), self.base_hp(), self.attack_power()),
        }
    }
}

impl fmt::Display for MonsterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A monster living in a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    pub kind: MonsterKind,
    pub fighter: Fighter,
}

impl Monster {
    pub fn name(&self) -> &str {
        &self.fighter.name
    }

    pub fn is_alive(&self) -> bool {
        self.fighter.is_alive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monster_table() {
        let goblin = MonsterKind::Goblin.spawn();
        assert_eq!(goblin.name(), "goblin");
        assert_eq!(goblin.fighter.hp, 30);
        assert_eq!(goblin.fighter.attack_power, 5);

        let spider = MonsterKind::GiantSpider.spawn();
        assert_eq!((spider.fighter.hp, spider.fighter.attack_power), (50, 8));

        let skeleton = MonsterKind::Skeleton.spawn();
        assert_eq!((skeleton.fighter.hp, skeleton.fighter.attack_power), (40, 6));
    }
}
