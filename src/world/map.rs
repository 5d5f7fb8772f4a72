//! The sparse room map
//!
//! Rooms are generated on first visit and kept forever after, so walking
//! back into a room finds it exactly as it was left.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::rng::Dice;
use super::{generate_room, Position, Room};

/// Every room generated so far, keyed by coordinate
#[derive(Debug, Clone, Default)]
pub struct World {
    rooms: HashMap<Position, Room>,
}

impl World {
    /// Create an empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the room at a position, generating it on first access
    pub fn room(&mut self, pos: Position, rng: &mut impl Dice) -> &mut Room {
        match self.rooms.entry(pos) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                log::debug!("Generating room at {}", pos);
                entry.insert(generate_room(rng, None))
            }
        }
    }

    /// Look at a room without generating it
    pub fn peek(&self, pos: Position) -> Option<&Room> {
        self.rooms.get(&pos)
    }

    /// Whether a room has been generated at this position
    pub fn contains(&self, pos: Position) -> bool {
        self.rooms.contains_key(&pos)
    }

    /// Number of rooms generated so far
    pub fn explored(&self) -> usize {
        self.rooms.len()
    }
}
