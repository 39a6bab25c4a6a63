//! Game settings loaded from an optional TOML file.

use std::path::Path;

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::games::twenty_one::MAX_TOTAL;

/// Who opens each game of a tic-tac-toe match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstMover {
    /// The human always moves first.
    #[default]
    Human,
    /// The computer always moves first.
    Computer,
    /// A coin flip at the start of each match decides.
    Random,
}

/// How the computer picks a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum ComputerStrategy {
    /// Any unmarked square, uniformly.
    Random,
    /// The lowest-numbered unmarked square.
    FirstAvailable,
    /// Complete its own line, else block, else take the center, else random.
    #[default]
    Smart,
}

/// Tic-tac-toe settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TicTacToeSettings {
    /// Game wins needed to take the match.
    target_score: u32,
    /// Who moves first.
    first_mover: FirstMover,
    /// The human player's name.
    human_name: String,
    /// The computer player's name.
    computer_name: String,
    /// Marker placed by the human.
    human_marker: char,
    /// Marker placed by the computer.
    computer_marker: char,
    /// Computer move policy.
    strategy: ComputerStrategy,
    /// Whether to ask before each new game within a match.
    prompt_between_games: bool,
}

impl Default for TicTacToeSettings {
    fn default() -> Self {
        Self {
            target_score: 5,
            first_mover: FirstMover::Human,
            human_name: "Player".to_string(),
            computer_name: "Ticky-Tacmaster 3000".to_string(),
            human_marker: 'X',
            computer_marker: 'O',
            strategy: ComputerStrategy::Smart,
            prompt_between_games: true,
        }
    }
}

impl TicTacToeSettings {
    /// Returns a copy with a different target score.
    pub fn with_target_score(mut self, target_score: u32) -> Self {
        self.target_score = target_score;
        self
    }

    /// Returns a copy with a different opening rule.
    pub fn with_first_mover(mut self, first_mover: FirstMover) -> Self {
        self.first_mover = first_mover;
        self
    }

    /// Returns a copy with a different computer policy.
    pub fn with_strategy(mut self, strategy: ComputerStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns a copy that does or does not ask between games.
    pub fn with_prompt_between_games(mut self, prompt: bool) -> Self {
        self.prompt_between_games = prompt;
        self
    }

    #[track_caller]
    fn validate(&self) -> Result<(), ConfigError> {
        if self.target_score == 0 {
            return Err(ConfigError::new("tictactoe.target_score must be at least 1"));
        }
        for marker in [self.human_marker, self.computer_marker] {
            if marker.is_whitespace() || ('1'..='9').contains(&marker) {
                return Err(ConfigError::new(format!(
                    "tictactoe marker {marker:?} would be confused with an empty square"
                )));
            }
        }
        if self.human_marker == self.computer_marker {
            return Err(ConfigError::new("tictactoe markers must differ"));
        }
        Ok(())
    }
}

/// Rock-paper-scissors-lizard-spock settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct RpsSettings {
    /// Game wins needed to take the match.
    target_score: u32,
    /// Fixed computer opponent; random from the roster when absent.
    computer_name: Option<String>,
}

impl Default for RpsSettings {
    fn default() -> Self {
        Self {
            target_score: 5,
            computer_name: None,
        }
    }
}

impl RpsSettings {
    /// Returns a copy with a different target score.
    pub fn with_target_score(mut self, target_score: u32) -> Self {
        self.target_score = target_score;
        self
    }

    /// Returns a copy with a fixed computer opponent.
    pub fn with_computer_name(mut self, name: impl Into<String>) -> Self {
        self.computer_name = Some(name.into());
        self
    }
}

/// Twenty-one settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TwentyOneSettings {
    /// The dealer keeps hitting below this total.
    dealer_stay_threshold: u32,
}

impl Default for TwentyOneSettings {
    fn default() -> Self {
        Self {
            dealer_stay_threshold: 17,
        }
    }
}

impl TwentyOneSettings {
    /// Sets the dealer's stay threshold.
    pub fn with_dealer_stay_threshold(mut self, threshold: u32) -> Self {
        self.dealer_stay_threshold = threshold;
        self
    }
}

/// Complete configuration for a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for every random choice; entropy when absent.
    seed: Option<u64>,
    /// Tic-tac-toe section.
    tictactoe: TicTacToeSettings,
    /// Rock-paper-scissors-lizard-spock section.
    rps: RpsSettings,
    /// Twenty-one section.
    twenty_one: TwentyOneSettings,
}

impl GameConfig {
    /// Loads and validates configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` when given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Overrides the configured seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    #[track_caller]
    fn validate(&self) -> Result<(), ConfigError> {
        self.tictactoe.validate()?;
        if self.rps.target_score == 0 {
            return Err(ConfigError::new("rps.target_score must be at least 1"));
        }
        if !(1..=MAX_TOTAL).contains(&self.twenty_one.dealer_stay_threshold) {
            return Err(ConfigError::new(format!(
                "twenty_one.dealer_stay_threshold must be between 1 and {MAX_TOTAL}"
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
