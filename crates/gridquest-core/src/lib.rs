//! Game state, save documents, and save files for Gridquest.
//!
//! This crate owns the whole-game aggregate and everything needed to move it
//! in and out of a text document. It sits on top of `gridquest-types`, which
//! defines the individual records.
//!
//! # Modules
//!
//! - [`codec`] -- YAML/JSON save documents: [`load`] and [`dump`]
//! - [`config`] -- Optional YAML configuration ([`GameConfig`])
//! - [`error`] -- Error types ([`GameError`], [`CodecError`], [`StoreError`])
//! - [`game`] -- The [`Game`] aggregate and [`GameBuilder`]
//! - [`grid`] -- Board size policy ([`assign_grid`])
//! - [`name_index`] -- Player name to position lookup ([`NameIndex`])
//! - [`store`] -- Path-based [`load_game`] and [`save_game`]

pub mod codec;
pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod name_index;
pub mod store;

// Re-export primary types at crate root.
pub use codec::{DocumentFormat, dump, dump_as, load, load_as};
pub use config::{ConfigError, GameConfig};
pub use error::{CodecError, GameError, StoreError};
pub use game::{Game, GameBuilder, GameDocument, GameRecord};
pub use grid::{Grid, assign_grid};
pub use name_index::NameIndex;
pub use store::{load_game, save_game};

pub use gridquest_types::{Demon, Item, Player, PlayerDefaults, RecordError};
