//! Game state machine
//!
//! A run is either exploring, or over because the player died or quit.
//! Fighting happens inside a single action and is never observable as a
//! state of its own.

use std::fmt;
use std::ops::RangeInclusive;

use crate::combat::{Combat, CombatEvent, CombatOutcome};
use crate::entities::{Player, PLAYER_MAX_HP};
use crate::items::{Inventory, Item};
use crate::rng::{Dice, GameRng};
use crate::world::{Direction, Position, Room, World};
use super::{legal_actions, Action, ActionError};

/// Damage dealt by a sprung trap
pub const TRAP_DAMAGE: RangeInclusive<i32> = 5..=15;
/// Health restored by drinking from a fountain
pub const FOUNTAIN_HEAL: RangeInclusive<i32> = 10..=30;

/// Run-level state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Walking the dungeon; the only state that accepts actions
    Exploring,
    /// The player died
    Dead,
    /// The player fled the dungeon
    Quit,
}

/// A trap went off as the player walked in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrapSprung {
    pub damage: i32,
    /// Player health afterwards
    pub hp: i32,
}

impl fmt::Display for TrapSprung {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You sprung a trap and took {} damage! You have {} HP left.",
            self.damage, self.hp
        )
    }
}

/// What happened as a result of an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Moved { to: Position },
    Fought {
        events: Vec<CombatEvent>,
        outcome: CombatOutcome,
    },
    PickedUp(Item),
    Drank {
        /// The amount rolled, before capping at max health
        healing: i32,
        hp: i32,
    },
    Inventory(Inventory),
    Quit,
}

/// End-of-run report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub name: String,
    pub state: RunState,
    pub hp: i32,
    pub position: Position,
    pub rooms_explored: usize,
    pub monsters_slain: u32,
    pub items: Vec<Item>,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fate = match self.state {
            RunState::Exploring => "is still exploring",
            RunState::Dead => "fell",
            RunState::Quit => "escaped",
        };
        write!(
            f,
            "{} {} at {} with {} HP, having explored {} rooms and slain {} monsters.",
            self.name, fate, self.position, self.hp, self.rooms_explored, self.monsters_slain
        )?;
        if !self.items.is_empty() {
            let names: Vec<&str> = self.items.iter().map(|i| i.name()).collect();
            write!(f, "\nLoot: {}", names.join(", "))?;
        }
        Ok(())
    }
}

/// One run through the dungeon
pub struct Game<D: Dice = GameRng> {
    player: Player,
    world: World,
    rng: D,
    state: RunState,
    monsters_slain: u32,
}

impl<D: Dice> Game<D> {
    /// Start a new run at the origin
    pub fn new(name: impl Into<String>, rng: D) -> Self {
        let player = Player::new(name);
        log::info!("New run for {}", player.name());
        Self {
            player,
            world: World::new(),
            rng,
            state: RunState::Exploring,
            monsters_slain: 0,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn rng(&self) -> &D {
        &self.rng
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state != RunState::Exploring
    }

    fn set_state(&mut self, state: RunState) {
        log::debug!("State transition: {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    /// The room the player is standing in, generated on first visit
    pub fn current_room(&mut self) -> &Room {
        self.world.room(self.player.position, &mut self.rng)
    }

    /// Run the automatic effects of walking into the current room
    ///
    /// Call once after every move, before offering actions. A trap fires
    /// only on the first entry; it is disarmed whatever the outcome.
    pub fn enter_room(&mut self) -> Option<TrapSprung> {
        if self.is_over() {
            return None;
        }

        let room = self.world.room(self.player.position, &mut self.rng);
        if !room.spring_trap() {
            return None;
        }

        let damage = self.rng.roll(*TRAP_DAMAGE.start(), *TRAP_DAMAGE.end());
        self.player.fighter.take_damage(damage);
        log::debug!("Trap at {} dealt {} damage", self.player.position, damage);

        if !self.player.is_alive() {
            self.set_state(RunState::Dead);
        }

        Some(TrapSprung {
            damage,
            hp: self.player.hp(),
        })
    }

    /// Actions allowed right now; none once the run is over
    pub fn legal_actions(&mut self) -> Vec<Action> {
        if self.is_over() {
            return Vec::new();
        }
        legal_actions(self.current_room())
    }

    /// Carry out an action
    ///
    /// Refuses, without changing anything, actions that aren't legal in the
    /// current room or that arrive after the run has ended.
    pub fn perform(&mut self, action: Action) -> Result<ActionOutcome, ActionError> {
        if self.is_over() {
            return Err(ActionError::RunOver { state: self.state });
        }
        if !self.legal_actions().contains(&action) {
            return Err(ActionError::Illegal { action });
        }

        log::debug!("{} at {}", action, self.player.position);

        match action {
            Action::Move(direction) => Ok(self.walk(direction)),
            Action::Attack => self.attack(),
            Action::Pickup(item) => self.pick_up(item),
            Action::Drink => self.drink(),
            Action::ViewInventory => Ok(ActionOutcome::Inventory(self.player.inventory.clone())),
            Action::Quit => {
                self.set_state(RunState::Quit);
                Ok(ActionOutcome::Quit)
            }
        }
    }

    fn walk(&mut self, direction: Direction) -> ActionOutcome {
        self.player.position = self.player.position.step(direction);
        ActionOutcome::Moved {
            to: self.player.position,
        }
    }

    fn attack(&mut self) -> Result<ActionOutcome, ActionError> {
        let room = self.world.room(self.player.position, &mut self.rng);
        let Some(monster) = room.monster.as_mut() else {
            return Err(ActionError::Illegal { action: Action::Attack });
        };

        let events: Vec<CombatEvent> =
            Combat::new(&mut self.player.fighter, &mut monster.fighter, &mut self.rng).collect();
        let outcome = if monster.is_alive() {
            CombatOutcome::Defeat
        } else {
            CombatOutcome::Victory
        };

        if outcome == CombatOutcome::Victory {
            room.monster = None;
        }

        match outcome {
            CombatOutcome::Victory => self.monsters_slain += 1,
            CombatOutcome::Defeat => self.set_state(RunState::Dead),
        }

        Ok(ActionOutcome::Fought { events, outcome })
    }

    fn pick_up(&mut self, item: Item) -> Result<ActionOutcome, ActionError> {
        let room = self.world.room(self.player.position, &mut self.rng);
        if room.item != Some(item) {
            return Err(ActionError::Illegal {
                action: Action::Pickup(item),
            });
        }

        room.item = None;
        self.player.inventory.add(item);
        log::debug!("Picked up {}", item);
        Ok(ActionOutcome::PickedUp(item))
    }

    fn drink(&mut self) -> Result<ActionOutcome, ActionError> {
        let room = self.world.room(self.player.position, &mut self.rng);
        if !room.dry_up() {
            return Err(ActionError::Illegal { action: Action::Drink });
        }

        let healing = self.rng.roll(*FOUNTAIN_HEAL.start(), *FOUNTAIN_HEAL.end());
        self.player.fighter.heal(healing, PLAYER_MAX_HP);
        Ok(ActionOutcome::Drank {
            healing,
            hp: self.player.hp(),
        })
    }

    /// Report on the run so far
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            name: self.player.name().to_string(),
            state: self.state,
            hp: self.player.hp(),
            position: self.player.position,
            rooms_explored: self.world.explored(),
            monsters_slain: self.monsters_slain,
            items: self.player.inventory.items().to_vec(),
        }
    }
}
