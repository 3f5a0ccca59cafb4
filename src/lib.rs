//! Hollowcave - Hunt the Wumpus on the terminal
//!
//! Twenty rooms on a dodecahedron, three bats, three pits, one wumpus and
//! a single hunter with a bow.

pub mod config;
pub mod entities;
pub mod game;
pub mod ui;
pub mod world;

// Re-export commonly used types
pub use config::{ConfigError, GameConfig};
pub use game::{Command, Game, GameState};
pub use world::Cave;
