//! Command-line interface for parlor_games.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Parlor Games - console tic-tac-toe, RPSLS, and twenty-one
#[derive(Parser, Debug)]
#[command(name = "parlor_games")]
#[command(about = "Console parlor games against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for every random choice (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Game to play (defaults to tic-tac-toe)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available games
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Tic-tac-toe against the computer, first to the target score
    #[default]
    Tictactoe,

    /// Rock, paper, scissors, lizard, Spock
    Rps,

    /// Twenty-one against the dealer
    TwentyOne,
}
