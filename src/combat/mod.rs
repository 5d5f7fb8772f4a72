//! Combat system

pub mod fight;

pub use fight::{resolve, Combat, CombatEvent, CombatOutcome};
