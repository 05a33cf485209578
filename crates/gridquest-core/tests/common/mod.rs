//! Shared fixtures for integration tests.

#![allow(dead_code, clippy::unwrap_used, clippy::new_without_default)]

use gridquest_core::{Demon, Game, Item};

/// Builds a populated game without touching any file.
pub struct GameFixture {
    names: Vec<String>,
    catalog: Vec<Item>,
    demons: Vec<Demon>,
    handouts: Vec<(String, String)>,
    moves: Vec<(String, i64)>,
}

impl GameFixture {
    /// Empty fixture with no players.
    pub const fn new() -> Self {
        Self {
            names: Vec::new(),
            catalog: Vec::new(),
            demons: Vec::new(),
            handouts: Vec::new(),
            moves: Vec::new(),
        }
    }

    /// The usual three-player table with a small catalog and roster.
    pub fn standard() -> Self {
        Self::new()
            .players(&["A", "B", "C"])
            .catalog_item("Fireball", "burns everything in the room")
            .catalog_item("Luck", "a four-leaf clover")
            .catalog_item("Potion", "restores a little health")
            .demon("Imp", 30)
            .demon("Balor", 250)
            .hand_out("A", "Fireball")
            .hand_out("A", "Fireball")
            .hand_out("A", "Luck")
            .hand_out("C", "Potion")
            .move_to("B", 6)
            .move_to("C", 11)
    }

    pub fn players(mut self, names: &[&str]) -> Self {
        self.names.extend(names.iter().map(|name| (*name).to_owned()));
        self
    }

    pub fn catalog_item(mut self, name: &str, description: &str) -> Self {
        self.catalog.push(Item::new(name, description));
        self
    }

    pub fn demon(mut self, name: &str, health: i64) -> Self {
        self.demons.push(Demon::new(name, health));
        self
    }

    pub fn hand_out(mut self, player: &str, item: &str) -> Self {
        self.handouts.push((player.to_owned(), item.to_owned()));
        self
    }

    pub fn move_to(mut self, player: &str, position: i64) -> Self {
        self.moves.push((player.to_owned(), position));
        self
    }

    pub fn build(self) -> Game {
        let mut game = Game::builder()
            .player_names(self.names)
            .items(self.catalog)
            .demons(self.demons)
            .build()
            .unwrap();
        for (player, item) in &self.handouts {
            game.give_catalog_item(player, item).unwrap();
        }
        for (player, position) in &self.moves {
            game.move_player(player, *position).unwrap();
        }
        game
    }
}
