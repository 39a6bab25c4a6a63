//! One player against the dealer.

use derive_more::Display;
use tracing::{debug, info, instrument};

use super::deck::Deck;
use super::hand::Hand;
use crate::config::TwentyOneSettings;
use crate::console::{Console, ConsoleError};
use crate::prompt::{ask_name, ask_yes_no, retrieve};
use crate::rng::GameRng;

const RULE: &str = "------------------------------------------------------------";
const DEALER: &str = "Dealer";
const HIT_OR_STAY: [&str; 4] = ["h", "hit", "s", "stay"];

/// How a round ended.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    /// The player beat the dealer.
    #[display("player wins")]
    PlayerWins,
    /// The dealer beat the player.
    #[display("dealer wins")]
    DealerWins,
    /// Equal totals.
    #[display("push")]
    Push,
}

/// Decides a finished round.
///
/// A busted player loses even if the dealer also busts.
pub fn settle(player: &Hand, dealer: &Hand) -> RoundResult {
    if player.busted() {
        RoundResult::DealerWins
    } else if dealer.busted() || player.total() > dealer.total() {
        RoundResult::PlayerWins
    } else if player.total() == dealer.total() {
        RoundResult::Push
    } else {
        RoundResult::DealerWins
    }
}

/// Rejects names the dealer could be confused with.
fn reject_dealer_name(name: &str) -> Option<&'static str> {
    if name.to_lowercase().contains("dealer") {
        Some("Your name can't have the word \"dealer\" in it!")
    } else {
        None
    }
}

/// A twenty-one table.
#[derive(Debug)]
pub struct TwentyOne<C: Console> {
    console: C,
    deck: Deck,
    player_name: String,
    player: Hand,
    dealer: Hand,
    stay_threshold: u32,
}

impl<C: Console> TwentyOne<C> {
    /// Greets the player and asks their name.
    #[instrument(skip(console, settings, rng))]
    pub fn setup(
        mut console: C,
        settings: &TwentyOneSettings,
        rng: GameRng,
    ) -> Result<Self, ConsoleError> {
        console.print("Welcome to 21! Step right up and play your cards!");
        let name = ask_name(&mut console, "Choose player name:", reject_dealer_name)?;
        info!(player = %name, "Player seated");
        Ok(Self::with_deck(
            console,
            name,
            Deck::new(rng),
            *settings.dealer_stay_threshold(),
        ))
    }

    /// Creates a table with a prepared deck.
    pub fn with_deck(console: C, player_name: String, deck: Deck, stay_threshold: u32) -> Self {
        Self {
            console,
            deck,
            player_name,
            player: Hand::new(),
            dealer: Hand::new(),
            stay_threshold,
        }
    }

    /// Returns the player's hand.
    pub fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the console.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Plays rounds until the player declines another.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        loop {
            self.play_round()?;
            if !ask_yes_no(&mut self.console, "Would you like to play another game? (y/n)")? {
                break;
            }
            self.console.print("Let's play again!");
            self.deck.reset();
        }
        self.console.print("Thanks for playing 21! Goodbye!");
        Ok(())
    }

    /// Deals, lets the player then the dealer act, and reports the result.
    #[instrument(skip(self))]
    pub fn play_round(&mut self) -> Result<RoundResult, ConsoleError> {
        self.console.print("Dealing initial cards...");
        self.player = Hand::from_cards(self.deck.deal_many(2));
        self.dealer = Hand::from_cards(self.deck.deal_many(2));
        self.show_hidden();

        self.player_turn()?;
        if !self.player.busted() {
            self.dealer_turn();
        }

        let result = settle(&self.player, &self.dealer);
        info!(
            player = self.player.total(),
            dealer = self.dealer.total(),
            %result,
            "Round settled"
        );
        let message = match result {
            RoundResult::Push => "Push! Both hands have the same score.".to_string(),
            RoundResult::PlayerWins => format!(
                "Congratulations! {} wins with {}!",
                self.player_name,
                self.player.total()
            ),
            RoundResult::DealerWins => format!(
                "Dealer wins with {}. Better luck next time!",
                self.dealer.total()
            ),
        };
        self.console.print(&message);
        Ok(result)
    }

    fn player_turn(&mut self) -> Result<(), ConsoleError> {
        loop {
            if self.player.busted() {
                self.show_all();
                self.console.print("You went too high. You busted!");
                return Ok(());
            }

            let choice = retrieve(
                &mut self.console,
                "Would you like to (h)it or (s)tay?",
                &HIT_OR_STAY,
                "You must enter (h)it or (s)tay!",
            )?;
            if !choice.starts_with('h') {
                break;
            }

            let card = self.deck.deal();
            debug!(%card, "Player hits");
            self.player.hit(card);
            self.console.print("You hit!");
            self.show_hidden();
        }

        let stay = format!("You stay at {}", self.player.total());
        self.console.print(&stay);
        Ok(())
    }

    fn dealer_turn(&mut self) {
        self.show_all();
        while self.dealer.total() < self.stay_threshold {
            let card = self.deck.deal();
            debug!(%card, "Dealer hits");
            self.dealer.hit(card);
            self.console.print("Dealer hits!");
            self.show_all();
        }

        if self.dealer.busted() {
            self.console.print("Dealer busts!");
        } else {
            self.console.print("Dealer stays.");
        }
    }

    fn show_hidden(&mut self) {
        let first = self
            .dealer
            .cards()
            .first()
            .map(ToString::to_string)
            .unwrap_or_default();
        let lines = [
            RULE.to_string(),
            format!("{DEALER} has {} cards:", self.dealer.cards().len()),
            format!("{first}, and one hidden card"),
            "Total value is: ???".to_string(),
            RULE.to_string(),
        ];
        for line in &lines {
            self.console.print(line);
        }
        self.show_hand(false);
    }

    fn show_all(&mut self) {
        self.show_hand(true);
        self.show_hand(false);
    }

    fn show_hand(&mut self, dealer: bool) {
        let (name, hand) = if dealer {
            (DEALER, &self.dealer)
        } else {
            (self.player_name.as_str(), &self.player)
        };
        let lines = [
            RULE.to_string(),
            format!("{name} has {} cards:", hand.cards().len()),
            hand.describe(),
            format!("Total value is: {}", hand.total()),
            RULE.to_string(),
        ];
        for line in &lines {
            self.console.print(line);
        }
    }
}
