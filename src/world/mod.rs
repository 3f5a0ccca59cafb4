//! World module
//!
//! The cave graph, room contents, and random placement.

pub mod cave;
pub mod generation;
pub mod room;
pub mod vacancy;

pub use cave::{Cave, Senses};
pub use generation::{populate, PlacementError};
pub use room::{Feature, Occupant, Room, RoomId, DEGREE, ROOM_COUNT};
pub use vacancy::Vacancy;
