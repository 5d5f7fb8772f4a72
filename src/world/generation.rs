//! Procedural room generation
//!
//! Rooms are rolled independently of their neighbours. Each call consumes a
//! handful of dice and has no other side effects.

use crate::entities::MonsterKind;
use crate::items::Item;
use crate::rng::Dice;
use super::{Room, RoomType};

/// Flavour text for ordinary rooms
pub const NORMAL_DESCRIPTIONS: [&str; 4] = [
    "You are in a dark, damp cave.",
    "You've entered a chamber filled with the bones of past adventurers.",
    "A long, narrow hallway stretches before you.",
    "You are in a vast cavern. You can hear the dripping of water.",
];

pub const TREASURE_DESCRIPTION: &str =
    "You find yourself in a brightly lit room with a large, ornate treasure chest.";

pub const FOUNTAIN_DESCRIPTION: &str =
    "You've discovered a room with a beautiful fountain in the center. The water glows with a soft, inviting light.";

pub const TRAP_DESCRIPTION: &str =
    "You enter a room and hear a 'click' under your feet. It's a trap!";

/// Generate a room, rolling its type when none is given
pub fn generate_room(rng: &mut impl Dice, room_type: Option<RoomType>) -> Room {
    let room_type = match room_type {
        Some(t) => t,
        None => RoomType::ALL[rng.pick(RoomType::ALL.len())],
    };

    let room = match room_type {
        RoomType::Normal => normal_room(rng),
        RoomType::Treasure => {
            let item = Item::TREASURE[rng.pick(Item::TREASURE.len())];
            Room::new(RoomType::Treasure, TREASURE_DESCRIPTION).with_item(item)
        }
        RoomType::Fountain => Room::new(RoomType::Fountain, FOUNTAIN_DESCRIPTION),
        RoomType::Trap => Room::new(RoomType::Trap, TRAP_DESCRIPTION),
    };

    log::debug!(
        "Generated {:?} room (monster: {:?}, item: {:?})",
        room.room_type,
        room.monster.as_ref().map(|m| m.kind),
        room.item
    );
    room
}

/// Ordinary room: random flavour, maybe a monster, maybe some junk
fn normal_room(rng: &mut impl Dice) -> Room {
    let description = NORMAL_DESCRIPTIONS[rng.pick(NORMAL_DESCRIPTIONS.len())];
    let mut room = Room::new(RoomType::Normal, description);

    // One slot per monster kind plus one for an empty room
    let slot = rng.pick(MonsterKind::ALL.len() + 1);
    room.monster = MonsterKind::ALL.get(slot).map(|kind| kind.spawn());

    // Same trick for loot: slot 0 is nothing
    let slot = rng.pick(Item::COMMON.len() + 1);
    room.item = slot.checked_sub(1).and_then(|i| Item::COMMON.get(i).copied());

    room
}
