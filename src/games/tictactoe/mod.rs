//! Tic-tac-toe: a 3x3 board, two players, first to the target score wins.

mod board;
mod controller;
mod move_source;
mod player;
mod position;

pub use board::{Board, LINES, MoveError, Square};
pub use controller::{GameOutcome, MatchController, MatchEnd, MatchRules, MatchState, Opening, Seat};
pub use move_source::{ComputerMoveSource, HumanMoveSource, MoveSource, Turn, TurnError};
pub use player::{Marker, Player};
pub use position::Position;
