//! Items: catalog entries and inventory contents.
//!
//! An item is a plain value. Handing an item to a player clones it, so the
//! catalog and every inventory hold independent copies. Inventory operations
//! treat two items with the same `name` as the same item; the description is
//! never compared there.

use serde::Serialize;

use crate::error::RecordError;
use crate::record::{ItemRecord, required};

/// An item that can sit in the catalog or in a player's inventory.
///
/// Serializes as `{name, description}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Item name; inventory identity.
    pub name: String,
    /// Flavour text.
    pub description: String,
}

impl Item {
    /// Create an item.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Whether `other` is the same item for inventory purposes.
    pub fn same_name(&self, other: &Self) -> bool {
        self.name == other.name
    }

    /// Build an item from a document record.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::MissingField`] if `name` or `description` is
    /// absent or null.
    pub fn from_record(record: ItemRecord) -> Result<Self, RecordError> {
        Ok(Self {
            name: required(record.name, "item", "name")?,
            description: required(record.description, "item", "description")?,
        })
    }
}

impl TryFrom<ItemRecord> for Item {
    type Error = RecordError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        Self::from_record(record)
    }
}
