//! Demons: the monster roster entries of a game.

use serde::Serialize;

use crate::error::RecordError;
use crate::record::{DemonRecord, required};

/// A demon on the game's roster.
///
/// Serializes as `{name, health}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Demon {
    /// Demon name.
    pub name: String,
    /// Hit points.
    pub health: i64,
}

impl Demon {
    /// Create a demon.
    pub fn new(name: impl Into<String>, health: i64) -> Self {
        Self {
            name: name.into(),
            health,
        }
    }

    /// Build a demon from a document record.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::MissingField`] if `name` or `health` is absent
    /// or null.
    pub fn from_record(record: DemonRecord) -> Result<Self, RecordError> {
        Ok(Self {
            name: required(record.name, "demon", "name")?,
            health: required(record.health, "demon", "health")?,
        })
    }
}

impl TryFrom<DemonRecord> for Demon {
    type Error = RecordError;

    fn try_from(record: DemonRecord) -> Result<Self, Self::Error> {
        Self::from_record(record)
    }
}
