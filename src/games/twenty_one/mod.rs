//! Twenty-one: one player against a dealer who draws to a threshold.

mod card;
mod deck;
mod game;
mod hand;

pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use game::{RoundResult, TwentyOne, settle};
pub use hand::{Hand, MAX_TOTAL};
