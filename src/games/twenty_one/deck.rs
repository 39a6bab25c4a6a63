//! A shuffled 52-card deck.

use strum::IntoEnumIterator;
use tracing::{debug, instrument};

use super::card::{Card, Rank, Suit};
use crate::rng::GameRng;

/// Shuffled deck that deals from the top.
///
/// Running out is not an error: the deck restocks and reshuffles itself.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: GameRng,
}

impl Deck {
    /// Creates a full, shuffled deck.
    #[instrument(skip(rng), fields(seed = rng.seed()))]
    pub fn new(rng: GameRng) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(52),
            rng,
        };
        deck.reset();
        deck
    }

    /// Creates a deck that deals `cards` in the given order, then restocks.
    pub fn stacked(cards: Vec<Card>, rng: GameRng) -> Self {
        let mut cards = cards;
        cards.reverse();
        Self { cards, rng }
    }

    /// Every card in a standard deck, unshuffled.
    pub fn full() -> Vec<Card> {
        Rank::iter()
            .flat_map(|rank| Suit::iter().map(move |suit| Card::new(rank, suit)))
            .collect()
    }

    /// Restores all 52 cards and shuffles.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cards = Self::full();
        self.rng.shuffle(&mut self.cards);
        debug!("Deck restocked");
    }

    /// Deals the top card.
    pub fn deal(&mut self) -> Card {
        loop {
            if let Some(card) = self.cards.pop() {
                return card;
            }
            self.reset();
        }
    }

    /// Deals `n` cards.
    pub fn deal_many(&mut self, n: usize) -> Vec<Card> {
        (0..n).map(|_| self.deal()).collect()
    }

    /// Returns how many cards are left.
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
