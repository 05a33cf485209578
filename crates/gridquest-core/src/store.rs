//! Save files on disk.
//!
//! Each call is one read or one write of the whole file. Saving overwrites
//! whatever is at the path; there is no partial-write recovery.

use std::path::Path;

use tracing::info;

use crate::codec::{DocumentFormat, dump_as, load_as};
use crate::error::StoreError;
use crate::game::Game;

/// Load a game from a save file.
///
/// The document format follows the file extension (see
/// [`DocumentFormat::from_path`]).
///
/// # Errors
///
/// Returns [`StoreError::Io`] if the file is absent or unreadable and
/// [`StoreError::Codec`] if its contents do not decode to a game.
pub fn load_game(path: &Path) -> Result<Game, StoreError> {
    let bytes = std::fs::read(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let game = load_as(&bytes, DocumentFormat::from_path(path))?;
    info!(
        path = %path.display(),
        players = game.players().len(),
        "Loaded game"
    );
    Ok(game)
}

/// Write a game to a save file, replacing any existing content.
///
/// # Errors
///
/// Returns [`StoreError::Codec`] if encoding fails and [`StoreError::Io`] if
/// the file cannot be written.
pub fn save_game(game: &Game, path: &Path) -> Result<(), StoreError> {
    let bytes = dump_as(game, DocumentFormat::from_path(path))?;
    std::fs::write(path, &bytes).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        bytes = bytes.len(),
        players = game.players().len(),
        "Saved game"
    );
    Ok(())
}
