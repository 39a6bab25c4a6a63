//! Computer opponents and their throwing habits.

use strum::IntoEnumIterator;
use tracing::{instrument, trace};

use super::choice::Choice;
use crate::rng::GameRng;

/// A named computer opponent with a weighted throw distribution.
///
/// An empty weight list means every throw is equally likely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Personality {
    name: String,
    weights: Vec<(Choice, u32)>,
}

impl Personality {
    /// Creates a personality from `(throw, weight)` pairs.
    pub fn new(name: impl Into<String>, weights: Vec<(Choice, u32)>) -> Self {
        Self {
            name: name.into(),
            weights,
        }
    }

    /// Creates a personality that throws uniformly at random.
    pub fn uniform(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    /// The built-in opponents.
    pub fn roster() -> Vec<Personality> {
        use Choice::*;
        vec![
            Self::new("R2D2", vec![(Rock, 34), (Paper, 33), (Scissors, 33)]),
            Self::new("Hal", vec![(Scissors, 50), (Lizard, 50)]),
            Self::new("C3PO", vec![(Spock, 50), (Paper, 30), (Rock, 20)]),
            Self::new("Wall-E", vec![(Lizard, 100)]),
            Self::new("NCC-1701 Computer", vec![(Spock, 100)]),
            Self::uniform("Rando Botrissian"),
        ]
    }

    /// Looks a roster opponent up by name; unknown names throw uniformly.
    pub fn named(name: &str) -> Personality {
        Self::roster()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .unwrap_or_else(|| Self::uniform(name))
    }

    /// Picks a random opponent from the roster.
    pub fn random(rng: &mut GameRng) -> Personality {
        let roster = Self::roster();
        rng.choose(&roster)
            .cloned()
            .unwrap_or_else(|| Self::uniform("Computer"))
    }

    /// Returns the opponent's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Draws a throw according to the weights.
    #[instrument(skip(self, rng), fields(name = %self.name))]
    pub fn throw(&self, rng: &mut GameRng) -> Choice {
        let total: u32 = self.weights.iter().map(|(_, weight)| weight).sum();
        if total == 0 {
            let all = Choice::iter().collect::<Vec<_>>();
            return rng.choose(&all).copied().unwrap_or(Choice::Rock);
        }

        let roll = rng.gen_inclusive(1, total);
        trace!(roll, total, "Personality roll");
        self.pick(roll)
    }

    /// Maps a roll in `1..=total` onto the cumulative weights.
    fn pick(&self, roll: u32) -> Choice {
        let mut cumulative = 0;
        for (choice, weight) in &self.weights {
            cumulative += weight;
            if cumulative >= roll {
                return *choice;
            }
        }
        self.weights
            .last()
            .map(|(choice, _)| *choice)
            .unwrap_or(Choice::Rock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cumulative_pick() {
        let c3po = Personality::named("C3PO");
        assert_eq!(c3po.pick(1), Choice::Spock);
        assert_eq!(c3po.pick(50), Choice::Spock);
        assert_eq!(c3po.pick(51), Choice::Paper);
        assert_eq!(c3po.pick(80), Choice::Paper);
        assert_eq!(c3po.pick(81), Choice::Rock);
        assert_eq!(c3po.pick(100), Choice::Rock);
    }

    #[test]
    fn test_single_throw_personality() {
        let walle = Personality::named("wall-e");
        let mut rng = GameRng::new(4);
        for _ in 0..25 {
            assert_eq!(walle.throw(&mut rng), Choice::Lizard);
        }
    }

    #[test]
    fn test_hal_never_throws_outside_weights() {
        let hal = Personality::named("Hal");
        let mut rng = GameRng::new(8);
        for _ in 0..100 {
            let throw = hal.throw(&mut rng);
            assert!(matches!(throw, Choice::Scissors | Choice::Lizard));
        }
    }

    #[test]
    fn test_unknown_name_is_uniform() {
        let stranger = Personality::named("Marvin");
        assert_eq!(stranger.name(), "Marvin");
        let mut rng = GameRng::new(2);
        let seen = (0..200)
            .map(|_| stranger.throw(&mut rng))
            .collect::<std::collections::HashSet<_>>();
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_random_comes_from_roster() {
        let mut rng = GameRng::new(13);
        let names = Personality::roster()
            .into_iter()
            .map(|p| p.name)
            .collect::<Vec<_>>();
        let pick = Personality::random(&mut rng);
        assert!(names.iter().any(|n| n == pick.name()));
    }
}
