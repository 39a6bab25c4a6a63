//! Hands and their totals.

use super::card::Card;

/// Highest total that does not bust.
pub const MAX_TOTAL: u32 = 21;

/// Cards held by one participant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a hand holding `cards`.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card.
    pub fn hit(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Scores the hand.
    ///
    /// Every ace counts 1, then one ace is raised to 11 if that does not
    /// bust. Two aces at 11 always bust, so one raise is enough.
    pub fn total(&self) -> u32 {
        let low: u32 = self
            .cards
            .iter()
            .map(|card| card.rank().value().unwrap_or(1))
            .sum();
        let has_ace = self.cards.iter().any(|card| card.is_ace());

        if has_ace && low + 10 <= MAX_TOTAL {
            low + 10
        } else {
            low
        }
    }

    /// Returns true when the total exceeds 21.
    pub fn busted(&self) -> bool {
        self.total() > MAX_TOTAL
    }

    /// Lists the cards, comma separated.
    pub fn describe(&self) -> String {
        self.cards
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
