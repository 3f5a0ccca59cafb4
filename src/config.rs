//! Game configuration
//!
//! Hazard counts and the RNG seed, read from an optional RON file. Missing
//! fields fall back to the classic game: three bats, three pits, random seed.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::world::{DEGREE, ROOM_COUNT};

/// Settings for a single hunt
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of bat rooms
    pub bats: usize,
    /// Number of bottomless pits
    pub pits: usize,
    /// Fixed seed for a reproducible cave; `None` picks one at random
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bats: 3,
            pits: 3,
            seed: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },

    /// The wumpus, bats and pits do not fit away from the player
    #[error("{requested} hazards requested but only {available} rooms are available")]
    TooManyHazards { requested: usize, available: usize },
}

impl GameConfig {
    /// Rooms left for the wumpus, bats and pits once the player and its
    /// neighbors are set aside
    pub const fn hazard_capacity() -> usize {
        ROOM_COUNT - 1 - DEGREE
    }

    /// Parse a config from RON text
    pub fn from_ron(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(text)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the per-user config if there is one, defaults otherwise
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let requested = 1 + self.bats + self.pits;
        let available = Self::hazard_capacity();
        if requested > available {
            return Err(ConfigError::TooManyHazards {
                requested,
                available,
            });
        }
        Ok(())
    }
}

/// Per-user config file location
pub fn default_config_path() -> Option<PathBuf> {
    use directories::ProjectDirs;

    ProjectDirs::from("com", "hollowcave", "Hollowcave")
        .map(|dirs| dirs.config_dir().join("config.ron"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.bats, 3);
        assert_eq!(config.pits, 3);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let config = GameConfig::from_ron("(bats: 2, seed: Some(42))").unwrap();
        assert_eq!(
            config,
            GameConfig {
                bats: 2,
                pits: 3,
                seed: Some(42),
            }
        );
    }

    #[test]
    fn test_bad_ron_is_an_error() {
        assert!(GameConfig::from_ron("(bats: \"many\")").is_err());
    }

    #[test]
    fn test_hazard_capacity() {
        assert_eq!(GameConfig::hazard_capacity(), 16);

        let full = GameConfig {
            bats: 8,
            pits: 7,
            seed: None,
        };
        assert!(full.validate().is_ok());

        let over = GameConfig { pits: 8, ..full };
        match over.validate() {
            Err(ConfigError::TooManyHazards {
                requested,
                available,
            }) => {
                assert_eq!(requested, 17);
                assert_eq!(available, 16);
            }
            other => panic!("expected TooManyHazards, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir()
            .join(format!("hollowcave-test-{}.ron", std::process::id()));
        fs::write(&path, "(pits: 1, seed: Some(5))").unwrap();

        let config = GameConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.pits, 1);
        assert_eq!(config.bats, 3);
        assert_eq!(config.seed, Some(5));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = Path::new("/definitely/not/here/hollowcave.ron");
        assert!(matches!(GameConfig::load(path), Err(ConfigError::Io { .. })));
    }
}
