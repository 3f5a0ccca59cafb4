//! Player commands
//!
//! Parses lines like `m14` (move to room 14) and `s3` (shoot into room 3).

use std::str::FromStr;

use thiserror::Error;

use crate::world::RoomId;

/// Something the player can do on their turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Walk into an adjacent room
    Move(RoomId),
    /// Fire an arrow into an adjacent room
    Shoot(RoomId),
}

impl Command {
    pub fn target(&self) -> RoomId {
        match *self {
            Command::Move(room) | Command::Shoot(room) => room,
        }
    }
}

/// Why a line of input could not be understood
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}'")]
    UnknownCommand(char),

    #[error("missing room number")]
    MissingRoom,

    #[error("'{0}' is not a room number")]
    InvalidRoom(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let mut chars = line.chars();
        let letter = chars.next().ok_or(CommandError::Empty)?;

        let make: fn(RoomId) -> Command = match letter.to_ascii_lowercase() {
            'm' => Command::Move,
            's' => Command::Shoot,
            _ => return Err(CommandError::UnknownCommand(letter)),
        };

        let rest = chars.as_str().trim_start();
        if rest.is_empty() {
            return Err(CommandError::MissingRoom);
        }
        // Digits only: `usize::from_str` would also take a leading '+'
        if !rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CommandError::InvalidRoom(rest.to_string()));
        }
        let room = rest
            .parse::<RoomId>()
            .map_err(|_| CommandError::InvalidRoom(rest.to_string()))?;

        Ok(make(room))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_and_shoot() {
        assert_eq!("m14".parse::<Command>(), Ok(Command::Move(14)));
        assert_eq!("s3".parse::<Command>(), Ok(Command::Shoot(3)));
        assert_eq!("  m 7 \n".parse::<Command>(), Ok(Command::Move(7)));
        assert_eq!("S0".parse::<Command>(), Ok(Command::Shoot(0)));
    }

    #[test]
    fn test_out_of_range_room_still_parses() {
        // Adjacency is checked when the turn is resolved
        assert_eq!("m25".parse::<Command>(), Ok(Command::Move(25)));
    }

    #[test]
    fn test_malformed_input() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!("   ".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "x3".parse::<Command>(),
            Err(CommandError::UnknownCommand('x'))
        );
        assert_eq!("m".parse::<Command>(), Err(CommandError::MissingRoom));
        assert_eq!(
            "mabc".parse::<Command>(),
            Err(CommandError::InvalidRoom("abc".into()))
        );
        assert_eq!(
            "m-1".parse::<Command>(),
            Err(CommandError::InvalidRoom("-1".into()))
        );
        assert_eq!(
            "m+4".parse::<Command>(),
            Err(CommandError::InvalidRoom("+4".into()))
        );
        assert_eq!(
            "m1 2".parse::<Command>(),
            Err(CommandError::InvalidRoom("1 2".into()))
        );
    }

    #[test]
    fn test_target() {
        assert_eq!(Command::Move(4).target(), 4);
        assert_eq!(Command::Shoot(9).target(), 9);
    }
}
