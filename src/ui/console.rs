//! Line-based console front end
//!
//! Prints the room report, reads `mXX`/`sXX` commands and narrates what
//! happened until the hunt ends or input runs out.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::game::{Command, Event, Game, GameState, TurnError};
use crate::world::Cave;

const USAGE: &str = "Type mXX(sXX) to move(shoot) to(at) room XX.";

/// Where you are, where you can go, and what you sense.
///
/// Only reads the cave, so asking twice gives the same answer.
pub fn report(cave: &Cave) -> String {
    let [a, b, c] = cave.player.neighbors();
    let mut text = format!(
        "You are in room {}\nAdjacent rooms are {}, {}, {}\n",
        cave.player.room(),
        a,
        b,
        c
    );

    let senses = cave.senses();
    if senses.bat {
        text.push_str("I hear a bat.\n");
    }
    if senses.draft {
        text.push_str("I feel a draft.\n");
    }
    if senses.wumpus {
        text.push_str("I smell the wumpus.\n");
    }
    text
}

/// Narration for an event, if the player gets to see it
pub fn describe(event: &Event) -> Option<&'static str> {
    match event {
        Event::BatCarried { .. } => Some("A giant bat takes you to another room!"),
        Event::EatenByWumpus => Some("The Wumpus got you! YOU LOSE."),
        Event::FellIntoPit => Some("You fell into a bottomless pit! YOU LOSE."),
        Event::WumpusKilled => Some("You killed the Wumpus! YOU WIN!"),
        Event::Entered(_) | Event::Missed { .. } => None,
    }
}

/// Message shown when a command is refused
pub fn rejection(error: &TurnError) -> &'static str {
    match error {
        TurnError::NotAdjacent {
            command: Command::Move(_),
            ..
        } => "Invalid choice. Please move to an ADJACENT room.",
        TurnError::NotAdjacent {
            command: Command::Shoot(_),
            ..
        } => "Invalid choice. Please target an ADJACENT room.",
        TurnError::GameOver => "The hunt is over.",
    }
}

/// Console session over any line source and sink
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Play until the game ends or input is exhausted. Returns the final state.
    pub fn run(&mut self, game: &mut Game) -> Result<GameState> {
        while !game.is_over() {
            write!(self.output, "{}", report(game.cave()))
                .context("failed to write report")?;

            let Some(command) = self.read_command()? else {
                log::info!("Input closed after {} turns", game.turns());
                break;
            };

            match game.take_turn(command) {
                Ok(events) => {
                    for text in events.iter().filter_map(describe) {
                        writeln!(self.output, "{}", text)?;
                    }
                }
                Err(e) => {
                    log::debug!("Turn refused: {}", e);
                    writeln!(self.output, "{}", rejection(&e))?;
                }
            }
        }

        self.output.flush()?;
        if game.is_over() {
            log::info!(
                "Hunt ended after {} turns: {:?}",
                game.turns(),
                game.state()
            );
        }
        Ok(game.state())
    }

    /// Prompt until a well-formed command arrives. `None` means end of input.
    fn read_command(&mut self) -> Result<Option<Command>> {
        writeln!(self.output, "{}", USAGE)?;
        let mut buf = Vec::new();
        loop {
            write!(self.output, "Enter command: ")?;
            self.output.flush()?;

            buf.clear();
            let read = self
                .input
                .read_until(b'\n', &mut buf)
                .context("failed to read command")?;
            if read == 0 {
                return Ok(None);
            }

            // Bytes that are not UTF-8 become U+FFFD and fail to parse like any other junk
            let line = String::from_utf8_lossy(&buf);
            match line.parse::<Command>() {
                Ok(command) => return Ok(Some(command)),
                Err(e) => {
                    log::debug!("Bad input {:?}: {}", line.trim_end(), e);
                    writeln!(self.output, "Invalid input. {}", USAGE)?;
                }
            }
        }
    }
}
