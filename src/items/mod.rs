//! Items and the player's pack

pub mod item;
pub mod inventory;

pub use item::{Item, ItemError};
pub use inventory::Inventory;
