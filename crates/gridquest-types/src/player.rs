//! Players and their inventories.
//!
//! A [`Player`] owns its inventory outright. Mutation goes through the owning
//! game so the name index stays consistent; the inventory helpers here are
//! the primitives it calls.

use serde::{Deserialize, Serialize};

use crate::error::RecordError;
use crate::item::Item;
use crate::record::{PlayerRecord, convert_all, required};

/// Starting stats for players created from a bare name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PlayerDefaults {
    /// Starting hit points.
    #[serde(default = "default_health")]
    pub health: i64,
    /// Starting attack power.
    #[serde(default = "default_power")]
    pub power: i64,
    /// Starting gold.
    #[serde(default = "default_gold")]
    pub gold: i64,
    /// Starting board position.
    #[serde(default)]
    pub position: i64,
}

impl Default for PlayerDefaults {
    fn default() -> Self {
        Self {
            health: default_health(),
            power: default_power(),
            gold: default_gold(),
            position: 0,
        }
    }
}

const fn default_health() -> i64 {
    100
}

const fn default_power() -> i64 {
    10
}

const fn default_gold() -> i64 {
    10
}

/// A player on the board.
///
/// Serializes as `{name, items, position, health, power, gold}` with items in
/// inventory order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    /// Player name, unique within a game.
    pub name: String,
    /// Inventory in acquisition order.
    pub items: Vec<Item>,
    /// Board position.
    pub position: i64,
    /// Hit points.
    pub health: i64,
    /// Attack power.
    pub power: i64,
    /// Gold carried.
    pub gold: i64,
}

impl Player {
    /// Create a player with the built-in starting stats and no items.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_defaults(name, &PlayerDefaults::default())
    }

    /// Create a player with the given starting stats and no items.
    pub fn with_defaults(name: impl Into<String>, defaults: &PlayerDefaults) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
            position: defaults.position,
            health: defaults.health,
            power: defaults.power,
            gold: defaults.gold,
        }
    }

    /// Build a player from a document record.
    ///
    /// Inventory entries are validated in order and the first bad entry
    /// fails the whole player; no holes are kept.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::MissingField`] if any player field or any
    /// item field is absent or null, and [`RecordError::NullEntry`] for a
    /// null inventory entry.
    pub fn from_record(record: PlayerRecord) -> Result<Self, RecordError> {
        let name = required(record.name, "player", "name")?;
        let items = required(record.items, "player", "items")?;
        let position = required(record.position, "player", "position")?;
        let power = required(record.power, "player", "power")?;
        let health = required(record.health, "player", "health")?;
        let gold = required(record.gold, "player", "gold")?;

        let items = convert_all(items, "items", Item::from_record)?;

        Ok(Self {
            name,
            items,
            position,
            health,
            power,
            gold,
        })
    }

    /// Append an item to the inventory. Duplicates are allowed.
    pub fn give_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove every inventory entry named like `item`.
    ///
    /// Returns the number of entries removed; zero when nothing matched.
    pub fn use_item(&mut self, item: &Item) -> usize {
        let before = self.items.len();
        self.items.retain(|held| !held.same_name(item));
        before.saturating_sub(self.items.len())
    }

    /// Whether the inventory holds at least one item with this name.
    pub fn has_item(&self, name: &str) -> bool {
        self.items.iter().any(|held| held.name == name)
    }

    /// Number of inventory entries with this name.
    pub fn item_count(&self, name: &str) -> usize {
        self.items.iter().filter(|held| held.name == name).count()
    }
}

impl TryFrom<PlayerRecord> for Player {
    type Error = RecordError;

    fn try_from(record: PlayerRecord) -> Result<Self, Self::Error> {
        Self::from_record(record)
    }
}
