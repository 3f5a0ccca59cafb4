//! Game module - Core game logic and state management

mod command;
mod state;
mod turn;

pub use command::{Command, CommandError};
pub use state::{DeathCause, Game, GameState};
pub use turn::{Event, TurnError};
