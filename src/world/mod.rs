//! World module
//!
//! The endless grid of rooms and how each room is generated.

pub mod position;
pub mod room;
pub mod generation;
pub mod map;

pub use position::{Direction, Position};
pub use room::{Room, RoomType};
pub use generation::generate_room;
pub use map::World;
