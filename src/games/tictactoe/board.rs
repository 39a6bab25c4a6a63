//! The 3x3 grid and its terminal-state rules.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

use super::player::Marker;
use super::position::Position;

/// The eight winning lines, scanned rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Why a move was refused.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The number is not a square on the board.
    #[display("{} is not a square (choose 1-9)", _0)]
    OutOfRange(usize),

    /// The square already holds a marker.
    #[display("Square {} is already taken", _0)]
    Occupied(Position),

    /// The input was not a number at all.
    #[display("{:?} is not a square number", _0)]
    Unparseable(String),
}

impl std::error::Error for MoveError {}

/// State of one square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Claimed by the player with this marker.
    Marked(Marker),
}

impl Square {
    /// Returns the marker, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Square::Empty => None,
            Square::Marked(marker) => Some(marker),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Squares change only through [`Board::place`] and [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order.
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Validates that `number` names an empty square, without placing.
    #[instrument(skip(self))]
    pub fn check(&self, number: usize) -> Result<Position, MoveError> {
        let pos = Position::from_number(number)?;
        if !self.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }
        Ok(pos)
    }

    /// Places `marker` on square `number` (1-9).
    ///
    /// # Errors
    ///
    /// Fails without touching the board when the number is out of range or
    /// the square is already marked.
    #[instrument(skip(self))]
    pub fn place(&mut self, number: usize, marker: Marker) -> Result<Position, MoveError> {
        let pos = self.check(number)?;
        self.squares[pos.index()] = Square::Marked(marker);
        trace!(%pos, %marker, "Marker placed");
        Ok(pos)
    }

    /// Returns the marker on the first uniformly marked line.
    pub fn winning_marker(&self) -> Option<Marker> {
        LINES.iter().find_map(|&[a, b, c]| {
            let marker = self.get(a).marker()?;
            (self.get(b) == Square::Marked(marker) && self.get(c) == Square::Marked(marker))
                .then_some(marker)
        })
    }

    /// Returns true once somebody has three in a row.
    pub fn someone_won(&self) -> bool {
        self.winning_marker().is_some()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns the empty positions in ascending order.
    pub fn unmarked_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Finds the empty square that would complete a line for `marker`.
    pub fn completing_position(&self, marker: Marker) -> Option<Position> {
        LINES.iter().find_map(|line| {
            let mine = line
                .iter()
                .filter(|pos| self.get(**pos) == Square::Marked(marker))
                .count();
            let empty = line.iter().copied().find(|pos| self.is_empty(*pos));
            if mine == 2 { empty } else { None }
        })
    }

    /// Clears every square.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Draws the board as a bordered 3x3 grid; empty squares are blank.
    pub fn render(&self) -> String {
        let cell = |pos: Position| match self.get(pos) {
            Square::Empty => ' ',
            Square::Marked(marker) => marker.symbol(),
        };

        let rows = Position::ALL
            .chunks(3)
            .map(|row| {
                format!(
                    "     |     |\n  {}  |  {}  |  {}\n     |     |",
                    cell(row[0]),
                    cell(row[1]),
                    cell(row[2])
                )
            })
            .collect::<Vec<_>>();
        rows.join("\n-----+-----+-----\n")
    }
}
