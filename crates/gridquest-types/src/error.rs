//! Error types for record validation.
//!
//! A record is the raw shape of one entity as it appears in a save document.
//! Converting a record into its entity type fails with [`RecordError`] when a
//! required field is absent or explicitly null.

/// Errors raised while turning a document record into an entity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// A required key was absent or null.
    #[error("{record} record is missing required field `{field}`")]
    MissingField {
        /// Kind of record being read (`demon`, `item`, `player`, `game`).
        record: &'static str,
        /// Name of the missing key.
        field: &'static str,
    },

    /// A sequence contained a null entry where a record was expected.
    #[error("null entry at index {index} in `{collection}`")]
    NullEntry {
        /// Name of the sequence holding the null.
        collection: &'static str,
        /// Zero-based position of the null entry.
        index: usize,
    },
}
