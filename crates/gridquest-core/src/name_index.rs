//! Name-to-position lookup for players.
//!
//! The index maps each player name to that player's slot in the game's
//! players sequence. [`Game`](crate::Game) is the only writer and keeps the
//! two in step: an entry is added exactly when a player is appended.

use std::collections::BTreeMap;

use gridquest_types::Player;

use crate::error::GameError;

/// Player name to position in the players sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameIndex {
    positions: BTreeMap<String, usize>,
}

impl NameIndex {
    /// Create an empty index.
    pub const fn new() -> Self {
        Self {
            positions: BTreeMap::new(),
        }
    }

    /// Build an index over `players` in order.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DuplicatePlayer`] for the first name that
    /// appears twice.
    pub fn from_players(players: &[Player]) -> Result<Self, GameError> {
        let mut index = Self::new();
        for (position, player) in players.iter().enumerate() {
            index.insert(&player.name, position)?;
        }
        Ok(index)
    }

    /// Record `name` at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DuplicatePlayer`] if the name is already indexed;
    /// the existing entry is left untouched.
    pub fn insert(&mut self, name: &str, position: usize) -> Result<(), GameError> {
        if self.positions.contains_key(name) {
            return Err(GameError::DuplicatePlayer(name.to_owned()));
        }
        self.positions.insert(name.to_owned(), position);
        Ok(())
    }

    /// Position of the player with this name.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Whether a player with this name is indexed.
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Number of indexed names.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate over `(name, position)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.positions
            .iter()
            .map(|(name, position)| (name.as_str(), *position))
    }
}
