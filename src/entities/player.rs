//! Player entity

use crate::world::room::{neighbors_of, RoomId, DEGREE};

/// The hunter. Keeps its neighbor list cached alongside its room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    room: RoomId,
    neighbors: [RoomId; DEGREE],
}

impl Player {
    /// Spawn the player in a room
    pub fn new(room: RoomId) -> Self {
        Self {
            room,
            neighbors: neighbors_of(room),
        }
    }

    pub fn room(&self) -> RoomId {
        self.room
    }

    pub fn neighbors(&self) -> [RoomId; DEGREE] {
        self.neighbors
    }

    /// Relocate, refreshing the cached neighbors
    pub fn set_room(&mut self, room: RoomId) {
        self.room = room;
        self.neighbors = neighbors_of(room);
    }

    pub fn is_adjacent(&self, room: RoomId) -> bool {
        self.neighbors.contains(&room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_follow_room() {
        let mut player = Player::new(0);
        assert_eq!(player.neighbors(), [19, 2, 18]);
        assert!(player.is_adjacent(2));
        assert!(!player.is_adjacent(5));

        player.set_room(19);
        assert_eq!(player.room(), 19);
        assert_eq!(player.neighbors(), neighbors_of(19));
        assert!(player.is_adjacent(0));
    }
}
