//! Game module - Core game logic and state management

mod action;
mod error;
mod state;

pub use action::{legal_actions, Action};
pub use error::ActionError;
pub use state::{ActionOutcome, Game, RunState, RunSummary, TrapSprung, FOUNTAIN_HEAL, TRAP_DAMAGE};
