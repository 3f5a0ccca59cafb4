//! Cave data structure
//!
//! The 20-room dodecahedron plus everything living in it: static features
//! per room, the player and the wumpus by room id, and the vacancy set.

use super::room::{Feature, Occupant, Room, RoomId, ROOM_COUNT};
use super::vacancy::Vacancy;
use super::PlacementError;
use crate::entities::Player;

/// The cave and its inhabitants
#[derive(Debug, Clone)]
pub struct Cave {
    pub rooms: Vec<Room>,
    pub player: Player,
    /// Room the wumpus is currently in
    pub wumpus: RoomId,
    pub vacancy: Vacancy,
}

/// Clues the player picks up from the neighboring rooms
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Senses {
    pub bat: bool,
    pub draft: bool,
    pub wumpus: bool,
}

/// Build the bare dodecahedron with no features placed
pub fn build_rooms() -> Vec<Room> {
    (0..ROOM_COUNT).map(Room::new).collect()
}

impl Cave {
    /// Build a cave from a fixed layout instead of random placement.
    ///
    /// Every entity must sit in its own room. Unlike random placement,
    /// hazards adjacent to the player are accepted.
    pub fn with_layout(
        player: RoomId,
        wumpus: RoomId,
        bats: &[RoomId],
        pits: &[RoomId],
    ) -> Result<Self, PlacementError> {
        let mut rooms = build_rooms();
        let mut vacancy = Vacancy::all(ROOM_COUNT);

        let placements = std::iter::once((player, None))
            .chain(std::iter::once((wumpus, None)))
            .chain(bats.iter().map(|&r| (r, Some(Feature::Bat))))
            .chain(pits.iter().map(|&r| (r, Some(Feature::Pit))));

        for (room, feature) in placements {
            if room >= ROOM_COUNT {
                return Err(PlacementError::OutOfRange { room });
            }
            if !vacancy.occupy(room) {
                return Err(PlacementError::Conflict { room });
            }
            if let Some(feature) = feature {
                rooms[room].feature = feature;
            }
        }

        Ok(Self {
            rooms,
            player: Player::new(player),
            wumpus,
            vacancy,
        })
    }

    /// Get a room by id
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Static feature of a room. Unknown rooms read as empty.
    pub fn feature(&self, id: RoomId) -> Feature {
        self.room(id).map_or(Feature::Empty, |r| r.feature)
    }

    /// Who or what is in a room, the player first, then the wumpus
    pub fn occupant(&self, id: RoomId) -> Occupant {
        if self.player.room() == id {
            Occupant::Player
        } else if self.wumpus == id {
            Occupant::Wumpus
        } else {
            self.feature(id).into()
        }
    }

    /// Count rooms holding a given feature
    pub fn count_feature(&self, feature: Feature) -> usize {
        self.rooms.iter().filter(|r| r.feature == feature).count()
    }

    /// Whether the wumpus is in one of the player's neighboring rooms
    pub fn wumpus_nearby(&self) -> bool {
        self.player.is_adjacent(self.wumpus)
    }

    /// What the player hears, feels and smells from where they stand
    pub fn senses(&self) -> Senses {
        let mut senses = Senses::default();
        for n in self.player.neighbors() {
            match self.feature(n) {
                Feature::Bat => senses.bat = true,
                Feature::Pit => senses.draft = true,
                Feature::Empty => {}
            }
            if self.wumpus == n {
                senses.wumpus = true;
            }
        }
        senses
    }

    /// A room is free when it has no feature and neither mobile entity is in it
    fn is_free(&self, id: RoomId) -> bool {
        self.feature(id) == Feature::Empty && self.player.room() != id && self.wumpus != id
    }

    /// Put the player in `to`, returning the vacated room to the vacancy set
    pub fn move_player(&mut self, to: RoomId) {
        let from = self.player.room();
        self.player.set_room(to);
        self.vacancy.occupy(to);
        if self.is_free(from) {
            self.vacancy.release(from);
        }
    }

    /// Put the wumpus in `to`. A room it leaves only becomes vacant if
    /// nothing else is there.
    pub fn move_wumpus(&mut self, to: RoomId) {
        let from = self.wumpus;
        self.wumpus = to;
        self.vacancy.occupy(to);
        if self.is_free(from) {
            self.vacancy.release(from);
        }
    }

    /// Full layout listing. Reveals everything, so for debugging only.
    pub fn dump(&self) -> String {
        let yes_no = |b: bool| if b { "yes" } else { "no" };
        let mut out = String::new();
        for room in &self.rooms {
            let wumpus = yes_no(self.wumpus == room.id);
            let bat = yes_no(room.feature == Feature::Bat);
            let pit = yes_no(room.feature == Feature::Pit);
            let player = yes_no(self.player.room() == room.id);
            let [a, b, c] = room.neighbors;

            out.push_str(&format!("Room #{}:\n", room.id));
            out.push_str(&format!("\tWumpus -> {}\n", wumpus));
            out.push_str(&format!("\tBat -> {}\n", bat));
            out.push_str(&format!("\tPit -> {}\n", pit));
            out.push_str(&format!("\tPlayer -> {}\n", player));
            out.push_str(&format!("\tAdjacent Rooms -> {}, {}, {}\n\n", a, b, c));
        }
        out
    }
}
