//! Player identities and their markers.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::scoreboard::PlayerId;

/// The single character a player stamps on claimed squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub struct Marker(char);

impl Marker {
    /// Wraps a marker character.
    pub const fn new(symbol: char) -> Self {
        Self(symbol)
    }

    /// Returns the character.
    pub fn symbol(self) -> char {
        self.0
    }
}

/// An immutable player identity.
///
/// Equality is by [`PlayerId`] alone; two players sharing a marker is a
/// caller error this type does not detect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    marker: Marker,
}

impl Player {
    /// Creates a player.
    pub fn new(id: PlayerId, name: impl Into<String>, marker: Marker) -> Self {
        Self {
            id,
            name: name.into(),
            marker,
        }
    }

    /// Returns the player's identity.
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the marker.
    pub fn marker(&self) -> Marker {
        self.marker
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}
