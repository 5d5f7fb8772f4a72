//! Inventory system
//!
//! An ordered, append-only list of carried items.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Item;

/// Player inventory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item at the end
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Items in pickup order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: Item) -> bool {
        self.items.contains(&item)
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return write!(f, "Your inventory is empty.");
        }
        write!(f, "You are carrying:")?;
        for item in &self.items {
            write!(f, "\n- {}", item)?;
        }
        Ok(())
    }
}
