//! Rock-paper-scissors-lizard-spock against a computer personality.

mod choice;
mod game;
mod history;
mod personality;

pub use choice::Choice;
pub use game::{ChoiceSource, ComputerChoice, HumanChoice, RoundOutcome, RpsGame};
pub use history::History;
pub use personality::Personality;
