//! Entity types

pub mod player;

pub use player::Player;
