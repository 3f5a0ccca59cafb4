//! Room definitions
//!
//! Room identifiers, static room features, and the occupant query type.

/// Number of rooms in the cave
pub const ROOM_COUNT: usize = 20;

/// Every room connects to exactly this many neighbors
pub const DEGREE: usize = 3;

/// Index of a room, always in `0..ROOM_COUNT` for rooms of the cave
pub type RoomId = usize;

/// A single room in the cave
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub neighbors: [RoomId; DEGREE],
    pub feature: Feature,
}

impl Room {
    pub fn new(id: RoomId) -> Self {
        Self {
            id,
            neighbors: neighbors_of(id),
            feature: Feature::Empty,
        }
    }
}

/// Static content of a room. Placed once, never moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Feature {
    #[default]
    Empty,
    Bat,
    Pit,
}

impl Feature {
    pub fn is_hazard(&self) -> bool {
        !matches!(self, Feature::Empty)
    }
}

/// What someone standing in a room would run into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occupant {
    Empty,
    Player,
    Wumpus,
    Bat,
    Pit,
}

impl From<Feature> for Occupant {
    fn from(feature: Feature) -> Self {
        match feature {
            Feature::Empty => Occupant::Empty,
            Feature::Bat => Occupant::Bat,
            Feature::Pit => Occupant::Pit,
        }
    }
}

/// The three rooms reachable from `id` on the dodecahedron.
///
/// Odd rooms step by 4 around the ring, even rooms by 2, and every room
/// also links to its mirror `19 - id`.
pub fn neighbors_of(id: RoomId) -> [RoomId; DEGREE] {
    let t = 2 + 2 * (id % 2);
    [
        ROOM_COUNT - 1 - id,
        (id + t) % ROOM_COUNT,
        (id + ROOM_COUNT - t) % ROOM_COUNT,
    ]
}
