//! Delve - A turn-based text dungeon crawl
//!
//! Wander an endless grid of rooms, fight what lives there, loot what lies
//! around, and try not to step on anything that clicks.

pub mod config;
pub mod rng;
pub mod entities;
pub mod items;
pub mod world;
pub mod combat;
pub mod game;

// Re-export commonly used types
pub use config::Config;
pub use game::{Action, ActionOutcome, Game, RunState};
pub use rng::{Dice, GameRng, LoadedDice};
pub use world::{Direction, Position, Room, RoomType, World};
