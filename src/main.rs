//! chess_replay - apply a sequence of moves and print the resulting game state.
//!
//! ```bash
//! chess_replay e2e4 e7e5 g1f3
//! chess_replay --from saved.json --pretty "e7 e8 q"
//! RUST_LOG=chess_rules=debug,chess_replay=debug chess_replay f2f3 e7e5 g2g4 d8h4
//! ```
//!
//! The final snapshot is printed to stdout as JSON; the status line goes to
//! stderr. The first rejected move stops the replay with a non-zero exit code.

use anyhow::{bail, Context, Result};
use chess_rules::notation::parse_move;
use chess_rules::settings::ReplaySettings;
use chess_rules::{Game, GameSnapshot};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "chess_replay")]
#[command(about = "Replay chess moves in coordinate notation and print the resulting state")]
struct Args {
    /// Moves to play, e.g. `e2e4` or `e7e8q`.
    moves: Vec<String>,

    /// Start from a saved snapshot instead of the standard position.
    #[arg(long, value_name = "FILE")]
    from: Option<PathBuf>,

    /// Settings file; defaults to settings.json in the user config directory.
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Print the snapshot as indented JSON.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let loaded = ReplaySettings::load(args.settings.as_deref());
    let settings = loaded.as_ref().cloned().unwrap_or_default();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .context("invalid log filter in settings")?;
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match &loaded {
        Ok(_) => debug!("[SETTINGS] Using {:?}", settings),
        Err(e) => warn!("[SETTINGS] {}. Using defaults.", e),
    }

    let mut game = match &args.from {
        Some(path) => load_game(path)?,
        None => Game::new(),
    };
    info!("[REPLAY] Starting with {} to move", game.turn());

    for (ply, text) in args.moves.iter().enumerate() {
        let mv = parse_move(text).with_context(|| format!("move {} ({text:?})", ply + 1))?;
        if let Err(e) = game.make_move(mv) {
            bail!("move {} ({}) rejected: {}", ply + 1, mv, e);
        }
    }

    let snapshot = game.snapshot();
    let json = if args.pretty || settings.pretty_json {
        snapshot.to_json_pretty()?
    } else {
        snapshot.to_json()?
    };
    println!("{json}");

    eprintln!(
        "{} to move, status {:?}, result {:?}",
        game.turn(),
        game.status(),
        game.result()
    );
    Ok(())
}

fn load_game(path: &Path) -> Result<Game> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let snapshot = GameSnapshot::from_json(&json)
        .with_context(|| format!("failed to parse snapshot {}", path.display()))?;
    Game::from_snapshot(&snapshot).with_context(|| format!("invalid snapshot {}", path.display()))
}
