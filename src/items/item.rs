//! Item definitions
//!
//! Items are plain loot: they have a name and nothing else. Normal rooms may
//! hold junk, treasure rooms always hold something better.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every item that can turn up in the dungeon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Item {
    RustySword,
    MysteriousAmulet,
    GleamingSword,
    SuitOfArmor,
    MagicalStaff,
}

/// Error parsing an item name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemError {
    #[error("no such item: {0:?}")]
    Unknown(String),
}

impl Item {
    pub const ALL: [Item; 5] = [
        Item::RustySword,
        Item::MysteriousAmulet,
        Item::GleamingSword,
        Item::SuitOfArmor,
        Item::MagicalStaff,
    ];

    /// Loot that may lie around in ordinary rooms
    pub const COMMON: [Item; 2] = [Item::RustySword, Item::MysteriousAmulet];

    /// Loot found in treasure chests
    pub const TREASURE: [Item; 3] = [Item::GleamingSword, Item::SuitOfArmor, Item::MagicalStaff];

    /// Display name, article included
    pub fn name(self) -> &'static str {
        match self {
            Item::RustySword => "a rusty sword",
            Item::MysteriousAmulet => "a mysterious amulet",
            Item::GleamingSword => "a gleaming sword",
            Item::SuitOfArmor => "a suit of armor",
            Item::MagicalStaff => "a magical staff",
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Item {
    type Err = ItemError;

    /// Exact name match only
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Item::ALL
            .into_iter()
            .find(|item| item.name() == s)
            .ok_or_else(|| ItemError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_names() {
        for item in Item::ALL {
            assert_eq!(item.name().parse::<Item>(), Ok(item));
        }
    }

    #[test]
    fn test_parse_rejects_partial_names() {
        assert!("rusty sword".parse::<Item>().is_err());
        assert!("sword".parse::<Item>().is_err());
        assert_eq!(
            "A Rusty Sword".parse::<Item>(),
            Err(ItemError::Unknown("A Rusty Sword".to_string()))
        );
    }
}
