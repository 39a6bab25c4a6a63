//! Playing cards.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Card suit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

/// Card rank.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Rank {
    /// 2
    #[display("2")]
    Two,
    /// 3
    #[display("3")]
    Three,
    /// 4
    #[display("4")]
    Four,
    /// 5
    #[display("5")]
    Five,
    /// 6
    #[display("6")]
    Six,
    /// 7
    #[display("7")]
    Seven,
    /// 8
    #[display("8")]
    Eight,
    /// 9
    #[display("9")]
    Nine,
    /// 10
    #[display("10")]
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Value of a non-ace card; aces are scored by the hand.
    pub fn value(self) -> Option<u32> {
        match self {
            Rank::Two => Some(2),
            Rank::Three => Some(3),
            Rank::Four => Some(4),
            Rank::Five => Some(5),
            Rank::Six => Some(6),
            Rank::Seven => Some(7),
            Rank::Eight => Some(8),
            Rank::Nine => Some(9),
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => Some(10),
            Rank::Ace => None,
        }
    }
}

/// A single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("{} of {}", rank, suit)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Creates a card.
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns the rank.
    pub fn rank(self) -> Rank {
        self.rank
    }

    /// Returns true for aces.
    pub fn is_ace(self) -> bool {
        self.rank == Rank::Ace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "10 of Hearts");
        assert_eq!(Card::new(Rank::Queen, Suit::Spades).to_string(), "Queen of Spades");
    }

    #[test]
    fn test_face_values() {
        assert_eq!(Rank::King.value(), Some(10));
        assert_eq!(Rank::Two.value(), Some(2));
        assert_eq!(Rank::Ace.value(), None);
        assert!(Card::new(Rank::Ace, Suit::Clubs).is_ace());
    }
}
