//! Error types for the `gridquest-core` crate.
//!
//! [`GameError`] covers the aggregate itself, [`CodecError`] wraps it with
//! text-format failures, and [`StoreError`] adds file access on top.

use std::path::PathBuf;

use gridquest_types::RecordError;

/// Errors raised by game construction and mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The game was built without a player source, or with two.
    #[error("invalid game configuration: {0}")]
    InvalidConfiguration(String),

    /// No player with this name is in the game.
    #[error("unknown player: {0}")]
    UnknownPlayer(String),

    /// A player with this name is already in the game.
    #[error("duplicate player name: {0}")]
    DuplicatePlayer(String),

    /// No catalog item with this name.
    #[error("unknown catalog item: {0}")]
    UnknownItem(String),

    /// A record in the document failed validation.
    #[error("invalid record: {0}")]
    Record(#[from] RecordError),
}

/// Errors raised while translating between bytes and a [`Game`](crate::Game).
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The document is not valid UTF-8.
    #[error("document is not valid UTF-8: {source}")]
    Encoding {
        /// The underlying decoding error.
        #[from]
        source: std::str::Utf8Error,
    },

    /// YAML could not be parsed or produced.
    #[error("YAML document error: {source}")]
    Yaml {
        /// The underlying YAML error.
        source: serde_yml::Error,
    },

    /// JSON could not be parsed or produced.
    #[error("JSON document error: {source}")]
    Json {
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// The document parsed but does not describe a valid game.
    #[error(transparent)]
    Game(#[from] GameError),
}

impl From<serde_yml::Error> for CodecError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json { source }
    }
}

impl From<RecordError> for CodecError {
    fn from(source: RecordError) -> Self {
        Self::Game(GameError::Record(source))
    }
}

/// Errors raised while loading or saving a game file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The file could not be read or written.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The file contents could not be encoded or decoded.
    #[error(transparent)]
    Codec(#[from] CodecError),
}
