//! Per-match win tallies.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Identity of a registered player.
///
/// Players compare by this id, never by name or marker.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[display("player#{}", _0)]
pub struct PlayerId(usize);

impl PlayerId {
    /// Creates an id from a seat number.
    pub const fn new(seat: usize) -> Self {
        Self(seat)
    }

    /// Returns the seat number.
    pub fn seat(self) -> usize {
        self.0
    }
}

/// Error raised by scoreboard updates.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ScoreboardError {
    /// The player was never registered with this scoreboard.
    #[display("{} is not on the scoreboard", _0)]
    UnknownPlayer(PlayerId),
}

impl std::error::Error for ScoreboardError {}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ScoreEntry {
    id: PlayerId,
    name: String,
    score: u32,
}

/// Win counts for the players of one match.
///
/// Owned by the controller that runs the match; nothing about it is global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    entries: Vec<ScoreEntry>,
    target_score: u32,
}

impl Scoreboard {
    /// Creates a scoreboard where every player starts at zero.
    #[instrument(skip(players))]
    pub fn new<I, S>(players: I, target_score: u32) -> Self
    where
        I: IntoIterator<Item = (PlayerId, S)>,
        S: Into<String>,
    {
        let entries = players
            .into_iter()
            .map(|(id, name)| ScoreEntry {
                id,
                name: name.into(),
                score: 0,
            })
            .collect::<Vec<_>>();
        debug!(players = entries.len(), "Scoreboard created");
        Self {
            entries,
            target_score,
        }
    }

    /// Returns the number of wins that takes the match.
    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    /// Returns a player's current count.
    pub fn score(&self, id: PlayerId) -> Option<u32> {
        self.entry(id).map(|entry| entry.score)
    }

    /// Adds one win for `id` and returns the new count.
    #[instrument(skip(self))]
    pub fn add_point(&mut self, id: PlayerId) -> Result<u32, ScoreboardError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or(ScoreboardError::UnknownPlayer(id))?;
        entry.score += 1;
        info!(player = %entry.name, score = entry.score, "Point awarded");
        Ok(entry.score)
    }

    /// Returns true once any player has reached the target.
    pub fn has_winner(&self) -> bool {
        self.winner().is_some()
    }

    /// Returns the player who reached the target, if any.
    pub fn winner(&self) -> Option<PlayerId> {
        self.entries
            .iter()
            .find(|entry| entry.score >= self.target_score)
            .map(|entry| entry.id)
    }

    /// Zeroes every count for a new match.
    #[instrument(skip(self))]
    pub fn reset_all(&mut self) {
        for entry in &mut self.entries {
            entry.score = 0;
        }
        debug!("Scores reset");
    }

    /// Formats the counts as `Name: n` pairs separated by tabs.
    pub fn summary(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("{}: {}", entry.name, entry.score))
            .collect::<Vec<_>>()
            .join("\t")
    }

    fn entry(&self, id: PlayerId) -> Option<&ScoreEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: PlayerId = PlayerId::new(0);
    const BOB: PlayerId = PlayerId::new(1);

    fn board(target: u32) -> Scoreboard {
        Scoreboard::new([(ALICE, "Alice"), (BOB, "Bob")], target)
    }

    #[test]
    fn test_counts_accumulate() {
        let mut scores = board(10);
        for _ in 0..3 {
            scores.add_point(ALICE).unwrap();
        }
        scores.add_point(BOB).unwrap();
        assert_eq!(scores.score(ALICE), Some(3));
        assert_eq!(scores.score(BOB), Some(1));
    }

    #[test]
    fn test_winner_at_target() {
        let mut scores = board(2);
        scores.add_point(BOB).unwrap();
        assert!(!scores.has_winner());
        assert_eq!(scores.winner(), None);
        scores.add_point(BOB).unwrap();
        assert!(scores.has_winner());
        assert_eq!(scores.winner(), Some(BOB));
    }

    #[test]
    fn test_unknown_player() {
        let mut scores = board(5);
        let stranger = PlayerId::new(7);
        assert_eq!(
            scores.add_point(stranger),
            Err(ScoreboardError::UnknownPlayer(stranger))
        );
    }

    #[test]
    fn test_reset_all() {
        let mut scores = board(1);
        scores.add_point(ALICE).unwrap();
        scores.reset_all();
        assert_eq!(scores.score(ALICE), Some(0));
        assert!(!scores.has_winner());
    }

    #[test]
    fn test_summary() {
        let mut scores = board(5);
        scores.add_point(BOB).unwrap();
        assert_eq!(scores.summary(), "Alice: 0\tBob: 1");
    }
}
