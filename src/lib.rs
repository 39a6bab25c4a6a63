//! Parlor Games library - console tic-tac-toe, rock-paper-scissors-lizard-spock, and twenty-one
//!
//! Every game talks to the player through a [`Console`], so the same code
//! drives the terminal binary and scripted tests.
//!
//! # Architecture
//!
//! - **Games**: tic-tac-toe match controller, RPSLS with computer personalities, twenty-one
//! - **Prompt**: validated console input (`retrieve`, yes/no, names)
//! - **Scoreboard**: per-player points toward a target
//! - **Config**: TOML settings with per-game sections
//!
//! # Example
//!
//! ```no_run
//! use parlor_games::{GameConfig, GameRng, MatchController, StdConsole};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GameConfig::load(None)?;
//! let rng = GameRng::from_seed(*config.seed());
//! let mut controller =
//!     MatchController::human_vs_computer(StdConsole::new(), config.tictactoe(), rng);
//! controller.run()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
pub mod games;
mod prompt;
mod rng;
mod scoreboard;

// Crate-level exports - Configuration
pub use config::{
    ComputerStrategy, ConfigError, FirstMover, GameConfig, RpsSettings, TicTacToeSettings,
    TwentyOneSettings,
};

// Crate-level exports - Console I/O
pub use console::{Console, ConsoleError, ScriptedConsole, StdConsole};

// Crate-level exports - Prompt helpers
pub use prompt::{YES_NO, ask_name, ask_yes_no, joinor, joinor_with, retrieve};

// Crate-level exports - Randomness
pub use rng::GameRng;

// Crate-level exports - Scoring
pub use scoreboard::{PlayerId, Scoreboard, ScoreboardError};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, GameOutcome, MatchController, MatchEnd, MatchRules, MatchState, MoveError, Position,
    Square,
};

// Crate-level exports - Other games
pub use games::rps::RpsGame;
pub use games::twenty_one::TwentyOne;
