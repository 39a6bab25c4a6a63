//! The games on offer.

pub mod rps;
pub mod tictactoe;
pub mod twenty_one;
