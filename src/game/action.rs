//! Player actions
//!
//! The closed set of things a player can try in a room, and which of them
//! the room currently allows.

use std::fmt;

use crate::items::Item;
use crate::world::{Direction, Room};

/// Something the player can do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Move(Direction),
    Attack,
    Pickup(Item),
    Drink,
    ViewInventory,
    Quit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move(direction) => write!(f, "go {}", direction.name().to_lowercase()),
            Action::Attack => write!(f, "attack"),
            Action::Pickup(item) => write!(f, "get {}", item),
            Action::Drink => write!(f, "drink"),
            Action::ViewInventory => write!(f, "inventory"),
            Action::Quit => write!(f, "quit"),
        }
    }
}

/// Actions allowed in a room, in menu order
///
/// Moving, checking the inventory and quitting are always possible. The rest
/// depend on what the room holds.
pub fn legal_actions(room: &Room) -> Vec<Action> {
    let mut actions: Vec<Action> = Direction::ALL.into_iter().map(Action::Move).collect();

    if room.monster.is_some() {
        actions.push(Action::Attack);
    }
    if let Some(item) = room.item {
        actions.push(Action::Pickup(item));
    }
    if room.is_fountain() {
        actions.push(Action::Drink);
    }

    actions.push(Action::ViewInventory);
    actions.push(Action::Quit);
    actions
}
