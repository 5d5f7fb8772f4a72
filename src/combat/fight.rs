//! Fight resolution
//!
//! A fight is a strict alternation: the player swings, then the monster, until
//! one of them drops. Each swing rolls uniformly between zero and the
//! attacker's attack power. [`Combat`] plays the fight out lazily as a stream
//! of [`CombatEvent`]s so the caller can narrate it blow by blow.
//!
//! If both sides have zero attack power and both start alive the fight never
//! ends. Nothing in the dungeon can produce that matchup.

use std::fmt;

use crate::entities::Fighter;
use crate::rng::Dice;

/// How a fight ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    Victory,
    Defeat,
}

/// One observable step of a fight
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    /// The fight starts
    Engaged { monster: String },
    /// The player hit the monster
    PlayerHit {
        monster: String,
        damage: i32,
        monster_hp: i32,
    },
    /// The monster hit the player
    MonsterHit {
        monster: String,
        damage: i32,
        player_hp: i32,
    },
    /// The monster died
    Victory { monster: String },
    /// The player died
    Defeat,
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatEvent::Engaged { monster } => write!(f, "You have encountered a {}!", monster),
            CombatEvent::PlayerHit { monster, damage, monster_hp } => write!(
                f,
                "You attack the {} for {} damage. The {} has {} HP left.",
                monster, damage, monster, monster_hp
            ),
            CombatEvent::MonsterHit { monster, damage, player_hp } => write!(
                f,
                "The {} attacks you for {} damage. You have {} HP left.",
                monster, damage, player_hp
            ),
            CombatEvent::Victory { monster } => write!(f, "You have defeated the {}!", monster),
            CombatEvent::Defeat => write!(f, "You have been defeated."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    PlayerTurn,
    MonsterTurn,
    Over(CombatOutcome),
    Done(CombatOutcome),
}

/// A fight in progress
///
/// Iterating drives the fight; hit points change as events are produced.
/// The iterator ends after the `Victory` or `Defeat` event.
pub struct Combat<'a, D: Dice> {
    player: &'a mut Fighter,
    monster: &'a mut Fighter,
    rng: &'a mut D,
    phase: Phase,
}

impl<'a, D: Dice> Combat<'a, D> {
    pub fn new(player: &'a mut Fighter, monster: &'a mut Fighter, rng: &'a mut D) -> Self {
        Self {
            player,
            monster,
            rng,
            phase: Phase::Start,
        }
    }

    /// The result, once the final event has been produced
    pub fn outcome(&self) -> Option<CombatOutcome> {
        match self.phase {
            Phase::Done(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Play the fight to the end, discarding the narration
    pub fn finish(mut self) -> CombatOutcome {
        loop {
            if let Some(outcome) = self.outcome() {
                return outcome;
            }
            self.next();
        }
    }

    fn monster_name(&self) -> String {
        self.monster.name.clone()
    }

    /// Who has already lost, if anyone
    fn decided(&self) -> Option<CombatOutcome> {
        if !self.player.is_alive() {
            Some(CombatOutcome::Defeat)
        } else if !self.monster.is_alive() {
            Some(CombatOutcome::Victory)
        } else {
            None
        }
    }
}

impl<D: Dice> Iterator for Combat<'_, D> {
    type Item = CombatEvent;

    fn next(&mut self) -> Option<CombatEvent> {
        match self.phase {
            Phase::Start => {
                self.phase = match self.decided() {
                    Some(outcome) => Phase::Over(outcome),
                    None => Phase::PlayerTurn,
                };
                Some(CombatEvent::Engaged { monster: self.monster_name() })
            }
            Phase::PlayerTurn => {
                let damage = self.rng.roll(0, self.player.attack_power);
                self.monster.take_damage(damage);
                self.phase = if self.monster.is_alive() {
                    Phase::MonsterTurn
                } else {
                    Phase::Over(CombatOutcome::Victory)
                };
                Some(CombatEvent::PlayerHit {
                    monster: self.monster_name(),
                    damage,
                    monster_hp: self.monster.hp,
                })
            }
            Phase::MonsterTurn => {
                let damage = self.rng.roll(0, self.monster.attack_power);
                self.player.take_damage(damage);
                self.phase = if self.player.is_alive() {
                    Phase::PlayerTurn
                } else {
                    Phase::Over(CombatOutcome::Defeat)
                };
                Some(CombatEvent::MonsterHit {
                    monster: self.monster_name(),
                    damage,
                    player_hp: self.player.hp,
                })
            }
            Phase::Over(outcome) => {
                self.phase = Phase::Done(outcome);
                log::debug!("Fight with {} ended: {:?}", self.monster.name, outcome);
                Some(match outcome {
                    CombatOutcome::Victory => CombatEvent::Victory { monster: self.monster_name() },
                    CombatOutcome::Defeat => CombatEvent::Defeat,
                })
            }
            Phase::Done(_) => None,
        }
    }
}

impl<D: Dice> std::iter::FusedIterator for Combat<'_, D> {}

/// Fight to the death without narration
pub fn resolve(player: &mut Fighter, monster: &mut Fighter, rng: &mut impl Dice) -> CombatOutcome {
    Combat::new(player, monster, rng).finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{GameRng, LoadedDice};

    #[test]
    fn test_scripted_victory() {
        let mut player = Fighter::new("hero", 100, 10);
        let mut goblin = Fighter::new("goblin", 30, 5);
        let mut dice = LoadedDice::new([10, 5, 10, 5, 10]);

        let outcome = resolve(&mut player, &mut goblin, &mut dice);
        assert_eq!(outcome, CombatOutcome::Victory);
        assert_eq!(goblin.hp, 0);
        assert_eq!(player.hp, 90);
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    fn test_event_stream() {
        let mut player = Fighter::new("hero", 100, 10);
        let mut goblin = Fighter::new("goblin", 12, 5);
        let mut dice = LoadedDice::new([10, 4, 3]);

        let events: Vec<CombatEvent> = Combat::new(&mut player, &mut goblin, &mut dice).collect();
        assert_eq!(
            events,
            vec![
                CombatEvent::Engaged { monster: "goblin".into() },
                CombatEvent::PlayerHit { monster: "goblin".into(), damage: 10, monster_hp: 2 },
                CombatEvent::MonsterHit { monster: "goblin".into(), damage: 4, player_hp: 96 },
                CombatEvent::PlayerHit { monster: "goblin".into(), damage: 3, monster_hp: -1 },
                CombatEvent::Victory { monster: "goblin".into() },
            ]
        );
    }

    #[test]
    fn test_defeat() {
        let mut player = Fighter::new("hero", 5, 10);
        let mut spider = Fighter::new("giant spider", 50, 8);
        let mut dice = LoadedDice::new([1, 8]);

        let mut combat = Combat::new(&mut player, &mut spider, &mut dice);
        let last = combat.by_ref().last();
        assert_eq!(last, Some(CombatEvent::Defeat));
        assert_eq!(combat.outcome(), Some(CombatOutcome::Defeat));
        assert_eq!(combat.next(), None);
        drop(combat);
        assert_eq!(player.hp, -3);
        assert_eq!(spider.hp, 49);
    }

    #[test]
    fn test_already_dead_monster() {
        let mut player = Fighter::new("hero", 100, 10);
        let mut corpse = Fighter::new("skeleton", 0, 6);
        let mut dice = LoadedDice::default();
        let events: Vec<_> = Combat::new(&mut player, &mut corpse, &mut dice).collect();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1], CombatEvent::Victory { monster: "skeleton".into() });
        assert_eq!(player.hp, 100);
    }

    #[test]
    fn test_outcome_unknown_until_done() {
        let mut player = Fighter::new("hero", 100, 10);
        let mut goblin = Fighter::new("goblin", 30, 5);
        let mut rng = GameRng::new(11);
        let mut combat = Combat::new(&mut player, &mut goblin, &mut rng);
        assert_eq!(combat.outcome(), None);
        combat.next();
        assert_eq!(combat.outcome(), None);
    }

    #[test]
    fn test_narration() {
        let hit = CombatEvent::PlayerHit { monster: "goblin".into(), damage: 7, monster_hp: 23 };
        assert_eq!(hit.to_string(), "You attack the goblin for 7 damage. The goblin has 23 HP left.");
        let bite = CombatEvent::MonsterHit { monster: "goblin".into(), damage: 2, player_hp: 98 };
        assert_eq!(bite.to_string(), "The goblin attacks you for 2 damage. You have 98 HP left.");
    }
}
