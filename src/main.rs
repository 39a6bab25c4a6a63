//! Parlor Games - console entry point
//!
//! Loads configuration, sets up logging on stderr, and runs the chosen game
//! against stdin/stdout.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use parlor_games::{
    ConsoleError, GameConfig, GameRng, MatchController, RpsGame, StdConsole, TwentyOne,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(cli.verbose);

    let config = GameConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_seed(cli.seed);
    let command = cli.command.unwrap_or_default();

    match play(command, &config) {
        Err(e) if e.is_closed() => {
            info!("Input closed, exiting");
            Ok(())
        }
        other => other.map_err(Into::into),
    }
}

#[instrument(skip(config))]
fn play(command: Command, config: &GameConfig) -> Result<(), ConsoleError> {
    let rng = GameRng::from_seed(*config.seed());
    info!(seed = rng.seed(), "Starting game");
    let console = StdConsole::new();

    match command {
        Command::Tictactoe => {
            MatchController::human_vs_computer(console, config.tictactoe(), rng).run()
        }
        Command::Rps => RpsGame::setup(console, config.rps(), rng)?.run(),
        Command::TwentyOne => TwentyOne::setup(console, config.twenty_one(), rng)?.run(),
    }
}

fn initialize_tracing(verbose: bool) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, env.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

/// Builds the filter from `RUST_LOG` (or `warn`), with `--verbose` layered on top.
fn log_filter(verbose: bool, env: Option<&str>) -> EnvFilter {
    let filter = env
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));
    if !verbose {
        return filter;
    }
    match "parlor_games=debug".parse::<Directive>() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}
