//! The five throws and who beats whom.

use std::cmp::Ordering;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// One of the five throws.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Choice {
    /// Crushes scissors and lizard.
    Rock,
    /// Covers rock, disproves Spock.
    Paper,
    /// Cuts paper, decapitates lizard.
    Scissors,
    /// Eats paper, poisons Spock.
    Lizard,
    /// Vaporizes rock, smashes scissors.
    Spock,
}

impl Choice {
    /// Returns the two throws this one defeats.
    pub fn defeats(self) -> [Choice; 2] {
        match self {
            Choice::Rock => [Choice::Scissors, Choice::Lizard],
            Choice::Paper => [Choice::Rock, Choice::Spock],
            Choice::Scissors => [Choice::Paper, Choice::Lizard],
            Choice::Lizard => [Choice::Paper, Choice::Spock],
            Choice::Spock => [Choice::Rock, Choice::Scissors],
        }
    }

    /// Returns true if `self` defeats `other`.
    pub fn beats(self, other: Choice) -> bool {
        self.defeats().contains(&other)
    }

    /// Compares two throws: `Greater` means `self` wins.
    pub fn versus(self, other: Choice) -> Ordering {
        if self.beats(other) {
            Ordering::Greater
        } else if other.beats(self) {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }

    /// Returns the one-letter shortcut.
    pub fn abbreviation(self) -> char {
        match self {
            Choice::Rock => 'r',
            Choice::Paper => 'p',
            Choice::Scissors => 's',
            Choice::Lizard => 'l',
            Choice::Spock => 'k',
        }
    }

    /// Menu text with the shortcut in parentheses, e.g. `Spoc(k)`.
    pub fn menu_label(self) -> &'static str {
        match self {
            Choice::Rock => "(R)ock",
            Choice::Paper => "(P)aper",
            Choice::Scissors => "(S)cissors",
            Choice::Lizard => "(L)izard",
            Choice::Spock => "Spoc(k)",
        }
    }

    /// Parses a full name or shortcut, ignoring case.
    pub fn parse(input: &str) -> Option<Choice> {
        let input = input.trim();
        let mut chars = input.chars();
        let shortcut = match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c.to_ascii_lowercase()),
            _ => None,
        };
        Choice::iter().find(|choice| {
            choice.to_string().eq_ignore_ascii_case(input)
                || shortcut == Some(choice.abbreviation())
        })
    }

    /// Every accepted spelling, for prompt validation.
    pub fn accepted_inputs() -> Vec<String> {
        Choice::iter()
            .flat_map(|choice| [choice.to_string(), choice.abbreviation().to_string()])
            .collect()
    }
}
