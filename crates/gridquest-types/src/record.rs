//! Inbound record shapes for save documents.
//!
//! Every field is optional so that a missing key and an explicit null decode
//! to the same `None`. Validation happens in the `from_record` constructors
//! of [`Demon`](crate::Demon), [`Item`](crate::Item) and
//! [`Player`](crate::Player). Unknown keys are ignored.

use serde::Deserialize;

use crate::error::RecordError;

/// Raw demon entry: `{name, health}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DemonRecord {
    /// Demon name.
    #[serde(default)]
    pub name: Option<String>,
    /// Hit points.
    #[serde(default)]
    pub health: Option<i64>,
}

/// Raw item entry: `{name, description}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ItemRecord {
    /// Item name; also its inventory identity.
    #[serde(default)]
    pub name: Option<String>,
    /// Flavour text.
    #[serde(default)]
    pub description: Option<String>,
}

/// Raw player entry: `{name, items, position, health, power, gold}`.
///
/// `items` keeps null entries as `None` so they can be reported instead of
/// silently dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlayerRecord {
    /// Player name.
    #[serde(default)]
    pub name: Option<String>,
    /// Inventory in acquisition order.
    #[serde(default)]
    pub items: Option<Vec<Option<ItemRecord>>>,
    /// Board position.
    #[serde(default)]
    pub position: Option<i64>,
    /// Hit points.
    #[serde(default)]
    pub health: Option<i64>,
    /// Attack power.
    #[serde(default)]
    pub power: Option<i64>,
    /// Gold carried.
    #[serde(default)]
    pub gold: Option<i64>,
}

/// Unwrap a required record field.
pub fn required<T>(
    value: Option<T>,
    record: &'static str,
    field: &'static str,
) -> Result<T, RecordError> {
    value.ok_or(RecordError::MissingField { record, field })
}

/// Convert a sequence of nullable records, failing on the first null entry
/// or the first record that does not convert.
pub fn convert_all<R, T, F>(
    entries: Vec<Option<R>>,
    collection: &'static str,
    convert: F,
) -> Result<Vec<T>, RecordError>
where
    F: Fn(R) -> Result<T, RecordError>,
{
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            entry
                .ok_or(RecordError::NullEntry { collection, index })
                .and_then(&convert)
        })
        .collect()
}
