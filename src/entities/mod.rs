//! Player and monster data

pub mod fighter;
pub mod player;
pub mod monsters;

pub use fighter::Fighter;
pub use player::{Player, PLAYER_ATTACK_POWER, PLAYER_MAX_HP};
pub use monsters::{Monster, MonsterKind};
