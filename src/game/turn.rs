//! Turn resolution
//!
//! Applies one command to the game: moving, shooting, bat carries and the
//! wumpus waking up.

use rand::Rng;
use thiserror::Error;

use super::command::Command;
use super::state::{DeathCause, Game, GameState};
use crate::world::{Occupant, RoomId, DEGREE};

/// Things that happened while resolving a turn, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The player walked into a room
    Entered(RoomId),
    /// A bat dropped the player somewhere else
    BatCarried { from: RoomId, to: RoomId },
    /// The player walked into the wumpus, or it walked into them
    EatenByWumpus,
    FellIntoPit,
    WumpusKilled,
    /// The arrow hit nothing. `wumpus_moved` is set if the noise woke it.
    Missed { wumpus_moved: bool },
}

/// A command that was refused. The game is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("room {target} is not adjacent to the player")]
    NotAdjacent { command: Command, target: RoomId },

    #[error("the game is already over")]
    GameOver,
}

impl Game {
    /// Resolve one command. Invalid commands cost nothing and change nothing.
    pub fn take_turn(&mut self, command: Command) -> Result<Vec<Event>, TurnError> {
        if self.is_over() {
            return Err(TurnError::GameOver);
        }
        if !self.cave.player.is_adjacent(command.target()) {
            log::debug!(
                "Rejected {:?} from room {}",
                command,
                self.cave.player.room()
            );
            return Err(TurnError::NotAdjacent {
                command,
                target: command.target(),
            });
        }

        self.count_turn();
        let events = match command {
            Command::Move(to) => self.move_player(to),
            Command::Shoot(target) => self.shoot(target),
        };
        Ok(events)
    }

    fn move_player(&mut self, to: RoomId) -> Vec<Event> {
        // Look before stepping in: the wumpus outranks whatever the room holds
        let found = self.cave.occupant(to);
        self.cave.move_player(to);
        let mut events = vec![Event::Entered(to)];

        match found {
            Occupant::Wumpus => {
                self.set_state(GameState::Lost(DeathCause::Wumpus));
                events.push(Event::EatenByWumpus);
            }
            Occupant::Pit => {
                self.set_state(GameState::Lost(DeathCause::Pit));
                events.push(Event::FellIntoPit);
            }
            Occupant::Bat => {
                // Drop-off rooms come from the vacancy set, so they are never
                // hazardous and no further checks are made
                if let Some(event) = self.bat_encounter() {
                    events.push(event);
                }
            }
            Occupant::Empty | Occupant::Player => {}
        }
        events
    }

    fn bat_encounter(&mut self) -> Option<Event> {
        let from = self.cave.player.room();
        let Some(to) = self.cave.vacancy.take_random(&mut self.rng) else {
            log::warn!(
                "Bat in room {} found no vacant room to carry the player to",
                from
            );
            return None;
        };
        self.cave.move_player(to);
        log::info!("Bat carried the player from room {} to room {}", from, to);
        Some(Event::BatCarried { from, to })
    }

    fn shoot(&mut self, target: RoomId) -> Vec<Event> {
        if self.cave.wumpus == target {
            self.set_state(GameState::Won);
            return vec![Event::WumpusKilled];
        }

        // A miss only matters if the wumpus is close enough to hear it
        if !self.cave.wumpus_nearby() {
            return vec![Event::Missed {
                wumpus_moved: false,
            }];
        }

        let mut events = vec![Event::Missed { wumpus_moved: true }];
        if self.move_wumpus() {
            self.set_state(GameState::Lost(DeathCause::Wumpus));
            events.push(Event::EatenByWumpus);
        }
        events
    }

    /// Move the wumpus into one of its neighbors. Returns true if it lands on the player.
    fn move_wumpus(&mut self) -> bool {
        let from = self.cave.wumpus;
        let neighbors = self.cave.rooms[from].neighbors;
        let to = neighbors[self.rng.gen_range(0..DEGREE)];

        self.cave.move_wumpus(to);
        log::debug!("Wumpus moved from room {} to room {}", from, to);

        to == self.cave.player.room()
    }
}
