//! The game aggregate.
//!
//! A [`Game`] owns its players, the demon roster, the item catalog, the
//! player name index and the board grid. Fields are private: every mutation
//! goes through a method that checks before it writes, so the name index and
//! the players sequence never disagree.
//!
//! Games are built either from bare player names (a fresh game) or from
//! fully formed players (a loaded game). Both routes run through
//! [`GameBuilder`]. The grid is assigned once at build time from the player
//! count and is not revisited when players join later.

use gridquest_types::record::{convert_all, required};
use gridquest_types::{
    Demon, DemonRecord, Item, ItemRecord, Player, PlayerDefaults, PlayerRecord,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::GameError;
use crate::grid::{Grid, assign_grid};
use crate::name_index::NameIndex;

/// Whole-game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    grid: Grid,
    players: Vec<Player>,
    index: NameIndex,
    demons: Vec<Demon>,
    items: Vec<Item>,
}

/// Serializable view of a game: `{players, demons, items}`.
///
/// The grid is not part of the document; it is re-derived on load.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GameDocument<'a> {
    /// Players in game order.
    pub players: &'a [Player],
    /// Demon roster.
    pub demons: &'a [Demon],
    /// Item catalog.
    pub items: &'a [Item],
}

/// Raw top-level document shape read from a save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GameRecord {
    /// Player entries.
    #[serde(default)]
    pub players: Option<Vec<Option<PlayerRecord>>>,
    /// Demon entries.
    #[serde(default)]
    pub demons: Option<Vec<Option<DemonRecord>>>,
    /// Catalog entries.
    #[serde(default)]
    pub items: Option<Vec<Option<ItemRecord>>>,
}

impl Game {
    /// Start building a game.
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    /// Fresh game with one default player per name and an empty catalog
    /// and roster.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DuplicatePlayer`] if a name repeats.
    pub fn from_names<I, S>(names: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::builder().player_names(names).build()
    }

    /// Fresh game whose players start with the given stats.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DuplicatePlayer`] if a name repeats.
    pub fn from_names_with<I, S>(names: I, defaults: &PlayerDefaults) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::builder()
            .player_names(names)
            .player_defaults(*defaults)
            .build()
    }

    /// Game from already-built players plus catalog and roster.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DuplicatePlayer`] if two players share a name.
    pub fn from_players(
        players: Vec<Player>,
        items: Vec<Item>,
        demons: Vec<Demon>,
    ) -> Result<Self, GameError> {
        Self::builder()
            .players(players)
            .items(items)
            .demons(demons)
            .build()
    }

    /// Game from a decoded save document.
    ///
    /// All three top-level keys must be present. Entries are validated in
    /// order and the first failure aborts the load. The grid is derived from
    /// the loaded player count.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Record`] for a missing key, a null entry or an
    /// invalid entry, and [`GameError::DuplicatePlayer`] if two players share
    /// a name.
    pub fn from_record(record: GameRecord) -> Result<Self, GameError> {
        let players = required(record.players, "game", "players")?;
        let demons = required(record.demons, "game", "demons")?;
        let items = required(record.items, "game", "items")?;

        let players = convert_all(players, "players", Player::from_record)?;
        let demons = convert_all(demons, "demons", Demon::from_record)?;
        let items = convert_all(items, "items", Item::from_record)?;

        Self::from_players(players, items, demons)
    }

    /// Borrow the game as a serializable document.
    pub fn to_document(&self) -> GameDocument<'_> {
        GameDocument {
            players: &self.players,
            demons: &self.demons,
            items: &self.items,
        }
    }

    fn assemble(
        players: Vec<Player>,
        items: Vec<Item>,
        demons: Vec<Demon>,
    ) -> Result<Self, GameError> {
        let index = NameIndex::from_players(&players)?;
        let grid = assign_grid(players.len());
        debug!(
            players = players.len(),
            demons = demons.len(),
            items = items.len(),
            rows = grid.rows,
            cols = grid.cols,
            "Assembled game"
        );
        Ok(Self {
            grid,
            players,
            index,
            demons,
            items,
        })
    }

    /// Board size, fixed at build time.
    pub const fn grid(&self) -> Grid {
        self.grid
    }

    /// Players in game order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Demon roster.
    pub fn demons(&self) -> &[Demon] {
        &self.demons
    }

    /// Item catalog.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The player name index.
    pub const fn name_index(&self) -> &NameIndex {
        &self.index
    }

    /// Position of the named player in [`players`](Self::players).
    pub fn player_index(&self, name: &str) -> Option<usize> {
        self.index.get(name)
    }

    /// Look up a player by name.
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.index.get(name).and_then(|slot| self.players.get(slot))
    }

    /// Look up a catalog item by name.
    pub fn catalog_item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Append a player with the built-in starting stats.
    ///
    /// Returns the new player's position. The grid is left as it is.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DuplicatePlayer`] if the name is taken; the game
    /// is unchanged.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<usize, GameError> {
        self.add_player_with(name, &PlayerDefaults::default())
    }

    /// Append a player with the given starting stats.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DuplicatePlayer`] if the name is taken; the game
    /// is unchanged.
    pub fn add_player_with(
        &mut self,
        name: impl Into<String>,
        defaults: &PlayerDefaults,
    ) -> Result<usize, GameError> {
        let name = name.into();
        let slot = self.players.len();
        if let Err(err) = self.index.insert(&name, slot) {
            warn!(player = %name, "Rejected duplicate player");
            return Err(err);
        }
        debug!(player = %name, slot, "Added player");
        self.players.push(Player::with_defaults(name, defaults));
        Ok(slot)
    }

    /// Set a player's board position.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownPlayer`] if no player has this name.
    pub fn move_player(&mut self, name: &str, new_position: i64) -> Result<(), GameError> {
        let player = self.player_mut(name)?;
        player.position = new_position;
        debug!(player = name, position = new_position, "Moved player");
        Ok(())
    }

    /// Append an item to a player's inventory.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownPlayer`] if no player has this name.
    pub fn give_item(&mut self, name: &str, item: Item) -> Result<(), GameError> {
        let player = self.player_mut(name)?;
        debug!(player = name, item = %item.name, "Gave item");
        player.give_item(item);
        Ok(())
    }

    /// Copy a catalog item into a player's inventory.
    ///
    /// The catalog keeps its entry.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownPlayer`] if no player has this name and
    /// [`GameError::UnknownItem`] if the catalog has no such item.
    pub fn give_catalog_item(&mut self, name: &str, item_name: &str) -> Result<(), GameError> {
        if !self.index.contains(name) {
            return Err(self.unknown_player(name));
        }
        let item = self
            .catalog_item(item_name)
            .cloned()
            .ok_or_else(|| GameError::UnknownItem(item_name.to_owned()))?;
        self.give_item(name, item)
    }

    /// Remove every entry named like `item` from a player's inventory.
    ///
    /// Returns how many entries were removed.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownPlayer`] if no player has this name.
    pub fn use_item(&mut self, name: &str, item: &Item) -> Result<usize, GameError> {
        let player = self.player_mut(name)?;
        let removed = player.use_item(item);
        debug!(player = name, item = %item.name, removed, "Used item");
        Ok(removed)
    }

    fn player_mut(&mut self, name: &str) -> Result<&mut Player, GameError> {
        match self.index.get(name) {
            Some(slot) => self
                .players
                .get_mut(slot)
                .ok_or_else(|| GameError::UnknownPlayer(name.to_owned())),
            None => Err(self.unknown_player(name)),
        }
    }

    fn unknown_player(&self, name: &str) -> GameError {
        warn!(player = name, known = self.players.len(), "Unknown player");
        GameError::UnknownPlayer(name.to_owned())
    }
}

/// Step-by-step game construction.
///
/// Exactly one player source must be set: either bare names or built
/// players.
#[derive(Debug, Clone, Default)]
pub struct GameBuilder {
    names: Option<Vec<String>>,
    players: Option<Vec<Player>>,
    items: Vec<Item>,
    demons: Vec<Demon>,
    defaults: PlayerDefaults,
}

impl GameBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create one default player per name.
    #[must_use]
    pub fn player_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Use already-built players.
    #[must_use]
    pub fn players(mut self, players: Vec<Player>) -> Self {
        self.players = Some(players);
        self
    }

    /// Starting stats for players created from names.
    #[must_use]
    pub const fn player_defaults(mut self, defaults: PlayerDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Replace the item catalog.
    #[must_use]
    pub fn items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    /// Add one catalog item.
    #[must_use]
    pub fn item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Replace the demon roster.
    #[must_use]
    pub fn demons(mut self, demons: Vec<Demon>) -> Self {
        self.demons = demons;
        self
    }

    /// Add one demon.
    #[must_use]
    pub fn demon(mut self, demon: Demon) -> Self {
        self.demons.push(demon);
        self
    }

    /// Build the game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfiguration`] unless exactly one player
    /// source was given, and [`GameError::DuplicatePlayer`] if a player name
    /// repeats.
    pub fn build(self) -> Result<Game, GameError> {
        match (self.names, self.players) {
            (Some(names), None) => {
                let players = names
                    .into_iter()
                    .map(|name| Player::with_defaults(name, &self.defaults))
                    .collect();
                Game::assemble(players, self.items, self.demons)
            }
            (None, Some(players)) => Game::assemble(players, self.items, self.demons),
            (None, None) => Err(GameError::InvalidConfiguration(
                "a game needs either player names or players".to_owned(),
            )),
            (Some(_), Some(_)) => Err(GameError::InvalidConfiguration(
                "player names and players cannot both be given".to_owned(),
            )),
        }
    }
}
