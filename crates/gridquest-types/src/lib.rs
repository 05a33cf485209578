//! Entity records for Gridquest save documents.
//!
//! This crate holds the leaf types of the game state: demons, items and
//! players, together with the record shapes they are decoded from. It has no
//! notion of a whole game; the aggregate lives in `gridquest-core`.
//!
//! # Modules
//!
//! - [`demon`] -- [`Demon`] roster entries
//! - [`error`] -- [`RecordError`] for record validation
//! - [`item`] -- [`Item`] values and name-based inventory identity
//! - [`player`] -- [`Player`] state, inventory primitives, [`PlayerDefaults`]
//! - [`record`] -- Optional-field record shapes read from documents

pub mod demon;
pub mod error;
pub mod item;
pub mod player;
pub mod record;

// Re-export all public types at crate root for convenience.
pub use demon::Demon;
pub use error::RecordError;
pub use item::Item;
pub use player::{Player, PlayerDefaults};
pub use record::{DemonRecord, ItemRecord, PlayerRecord};
