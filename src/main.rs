//! Hollowcave - Entry Point
//!
//! Parses flags, sets up logging and configuration, and runs the console
//! game loop on stdin/stdout.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use hollowcave::ui::Console;
use hollowcave::{Game, GameConfig};

#[derive(Parser)]
#[command(name = "hollowcave")]
#[command(about = "Hunt the Wumpus in a twenty-room cave")]
#[command(version)]
struct Cli {
    /// Config file (RON). Defaults to config.ron in the user config dir.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible cave
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of bat rooms
    #[arg(long)]
    bats: Option<usize>,

    /// Number of bottomless pits
    #[arg(long)]
    pits: Option<usize>,

    /// Print the whole cave layout to stderr before playing
    #[arg(long)]
    reveal: bool,

    /// Write log output to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    log::info!("Starting Hollowcave v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::load_or_default()?,
    };
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(bats) = cli.bats {
        config.bats = bats;
    }
    if let Some(pits) = cli.pits {
        config.pits = pits;
    }
    config.validate()?;

    let mut game = Game::new(&config).context("failed to lay out the cave")?;
    if cli.reveal {
        eprint!("{}", game.cave().dump());
    }

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    let result = console.run(&mut game);

    if let Err(ref e) = result {
        log::error!("Game exited with error: {}", e);
    }

    log::info!("Hollowcave shut down cleanly");
    result.map(|_| ())
}

/// Log to stderr by default, or to a file when asked
fn init_logging(log_file: Option<&std::path::Path>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}
