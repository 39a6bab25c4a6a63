//! Board positions, numbered 1-9 left-to-right, top-to-bottom.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::board::MoveError;

/// A square on the tic-tac-toe board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (square 1)
    TopLeft,
    /// Top-center (square 2)
    TopCenter,
    /// Top-right (square 3)
    TopRight,
    /// Middle-left (square 4)
    MiddleLeft,
    /// Center (square 5)
    Center,
    /// Middle-right (square 6)
    MiddleRight,
    /// Bottom-left (square 7)
    BottomLeft,
    /// Bottom-center (square 8)
    BottomCenter,
    /// Bottom-right (square 9)
    BottomRight,
}

impl Position {
    /// All 9 positions in ascending square order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Returns the square number players type (1-9).
    pub fn number(self) -> usize {
        self.index() + 1
    }

    /// Returns the row-major storage index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Creates a position from a square number.
    #[instrument]
    pub fn from_number(number: usize) -> Result<Self, MoveError> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or(MoveError::OutOfRange(number))
    }

    /// Parses typed input such as `" 5 "`.
    #[instrument]
    pub fn parse(input: &str) -> Result<Self, MoveError> {
        let trimmed = input.trim();
        let number = trimmed
            .parse::<usize>()
            .map_err(|_| MoveError::Unparseable(trimmed.to_string()))?;
        Self::from_number(number)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}
