//! Game state machine
//!
//! Owns the cave and the random source, and tracks whether the hunt is
//! still on.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;
use crate::world::{populate, Cave, PlacementError};

/// The main game struct that holds all game data
#[derive(Debug, Clone)]
pub struct Game {
    /// Current game state
    state: GameState,
    /// The cave and everyone in it
    pub(crate) cave: Cave,
    /// Random number generator (seeded for reproducibility)
    pub(crate) rng: StdRng,
    /// Seed the RNG was created from
    seed: u64,
    /// Number of accepted commands so far
    turns: u32,
}

/// All possible game states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Hunt in progress
    Playing,
    /// The wumpus is dead
    Won,
    /// The player is dead
    Lost(DeathCause),
}

/// How the player died
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    Wumpus,
    Pit,
}

impl Game {
    /// Create a new game, laying out the cave from the configured seed
    /// (or a fresh one if none is set)
    pub fn new(config: &GameConfig) -> Result<Self, PlacementError> {
        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let mut rng = StdRng::seed_from_u64(seed);
        let cave = populate(&mut rng, config.bats, config.pits)?;

        log::info!("New hunt started with seed {}", seed);

        Ok(Self::from_parts(cave, rng, seed))
    }

    /// Start a game on a prepared cave
    pub fn with_cave(cave: Cave, seed: u64) -> Self {
        Self::from_parts(cave, StdRng::seed_from_u64(seed), seed)
    }

    fn from_parts(cave: Cave, rng: StdRng, seed: u64) -> Self {
        Self {
            state: GameState::Playing,
            cave,
            rng,
            seed,
            turns: 0,
        }
    }

    /// Get the current game state
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Set a new game state
    pub(crate) fn set_state(&mut self, state: GameState) {
        log::debug!("State transition: {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    pub fn is_over(&self) -> bool {
        self.state != GameState::Playing
    }

    pub fn cave(&self) -> &Cave {
        &self.cave
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub(crate) fn count_turn(&mut self) {
        self.turns += 1;
    }
}
