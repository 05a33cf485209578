//! Translation between save-document bytes and a [`Game`].
//!
//! YAML is the default document format. JSON is accepted as well and is
//! picked by file extension in the store. Both carry the same shape:
//!
//! ```yaml
//! players:
//! - name: A
//!   items: []
//!   position: 0
//!   health: 100
//!   power: 10
//!   gold: 10
//! demons: []
//! items: []
//! ```

use std::path::Path;

use crate::error::CodecError;
use crate::game::{Game, GameRecord};

/// Text format of a save document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DocumentFormat {
    /// YAML document.
    #[default]
    Yaml,
    /// JSON document.
    Json,
}

impl DocumentFormat {
    /// Pick the format from a file extension: `.json` is JSON, everything
    /// else is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Decode a YAML save document.
///
/// # Errors
///
/// See [`load_as`].
pub fn load(bytes: &[u8]) -> Result<Game, CodecError> {
    load_as(bytes, DocumentFormat::Yaml)
}

/// Encode a game as a YAML save document.
///
/// # Errors
///
/// See [`dump_as`].
pub fn dump(game: &Game) -> Result<Vec<u8>, CodecError> {
    dump_as(game, DocumentFormat::Yaml)
}

/// Decode a save document in the given format.
///
/// # Errors
///
/// Returns [`CodecError::Encoding`] for non-UTF-8 input,
/// [`CodecError::Yaml`] or [`CodecError::Json`] for malformed text or
/// wrongly typed fields, and [`CodecError::Game`] when the document does not
/// describe a valid game.
pub fn load_as(bytes: &[u8], format: DocumentFormat) -> Result<Game, CodecError> {
    let text = std::str::from_utf8(bytes)?;
    let record: GameRecord = match format {
        DocumentFormat::Yaml => serde_yml::from_str(text)?,
        DocumentFormat::Json => serde_json::from_str(text)?,
    };
    Ok(Game::from_record(record)?)
}

/// Encode a game in the given format.
///
/// # Errors
///
/// Returns [`CodecError::Yaml`] or [`CodecError::Json`] if the serializer
/// fails.
pub fn dump_as(game: &Game, format: DocumentFormat) -> Result<Vec<u8>, CodecError> {
    let document = game.to_document();
    let bytes = match format {
        DocumentFormat::Yaml => serde_yml::to_string(&document)?.into_bytes(),
        DocumentFormat::Json => serde_json::to_vec_pretty(&document)?,
    };
    Ok(bytes)
}
