//! Fairgame console shell.
//!
//! Plays provably-fair generalized rock-paper-scissors: before every round
//! the computer publishes an HMAC-SHA256 commitment to its move, and after
//! the player's move is locked in it reveals the key so the commitment can
//! be checked independently.

mod shell;

use anyhow::Context;
use clap::Parser;
use fairgame_core::MoveSet;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Provably-fair generalized rock-paper-scissors
#[derive(Debug, Parser)]
#[command(name = "fairgame", version, about)]
struct Cli {
    /// Move names in cycle order: an odd count (at least 3) of distinct,
    /// non-blank names, e.g. `rock paper scissors`
    #[arg(required = true, num_args = 1..)]
    moves: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr and stay silent unless RUST_LOG enables
    // them; stdout belongs to the game transcript.
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let moves = MoveSet::new(cli.moves)
        .context("usage: fairgame <move1> <move2> ... with an odd number (at least 3) of distinct non-blank moves, e.g. `fairgame rock paper scissors`")?;

    shell::run(&moves)
}
