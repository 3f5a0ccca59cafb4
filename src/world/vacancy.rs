//! Vacancy tracking
//!
//! Ordered set of rooms nobody occupies, used to place entities without
//! collisions and to pick bat drop-off points.

use rand::Rng;

use super::room::RoomId;

/// Rooms that are currently free
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vacancy {
    rooms: Vec<RoomId>,
}

impl Vacancy {
    /// Every room in `0..count`, in order
    pub fn all(count: usize) -> Self {
        Self {
            rooms: (0..count).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn contains(&self, room: RoomId) -> bool {
        self.rooms.contains(&room)
    }

    pub fn rooms(&self) -> &[RoomId] {
        &self.rooms
    }

    /// Remove and return a uniformly chosen room, or `None` when nothing is left
    pub fn take_random(&mut self, rng: &mut impl Rng) -> Option<RoomId> {
        if self.rooms.is_empty() {
            return None;
        }
        let idx = rng.gen_range(0..self.rooms.len());
        Some(self.rooms.remove(idx))
    }

    /// Mark a room as taken. Returns false if it was not vacant.
    pub fn occupy(&mut self, room: RoomId) -> bool {
        match self.rooms.iter().position(|&r| r == room) {
            Some(pos) => {
                self.rooms.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Give a room back. Already-vacant rooms are not duplicated.
    pub fn release(&mut self, room: RoomId) {
        if !self.rooms.contains(&room) {
            self.rooms.push(room);
        }
    }
}
