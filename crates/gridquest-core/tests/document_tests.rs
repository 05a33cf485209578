//! Integration tests for save documents and save files.

// Integration tests use unwrap extensively for clarity -- panicking
// on failure is the correct behavior in test code.
#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

mod common;

use common::GameFixture;
use gridquest_core::{
    CodecError, DocumentFormat, GameError, Item, RecordError, StoreError, dump, dump_as,
    load, load_as, load_game, save_game,
};

const HAND_WRITTEN: &str = r"
players:
  - name: Ana
    items:
      - name: Luck
        description: a four-leaf clover
        weight: 1
    position: 3
    health: 85
    power: 12
    gold: 40
  - name: Bo
    items: []
    position: 0
    health: 100
    power: 10
    gold: 10
demons:
  - name: Imp
    health: 30
    horns: 2
items:
  - name: Luck
    description: a four-leaf clover
";

// ---------------------------------------------------------------------------
// Round trips
// ---------------------------------------------------------------------------

#[test]
fn standard_game_round_trips_through_yaml() {
    let game = GameFixture::standard().build();

    let reloaded = load(&dump(&game).unwrap()).unwrap();

    assert_eq!(reloaded.players(), game.players());
    assert_eq!(reloaded.demons(), game.demons());
    assert_eq!(reloaded.items(), game.items());
    assert_eq!(reloaded.grid(), game.grid());
    assert_eq!(reloaded.name_index(), game.name_index());
}

#[test]
fn standard_game_round_trips_through_json() {
    let game = GameFixture::standard().build();
    let bytes = dump_as(&game, DocumentFormat::Json).unwrap();
    assert_eq!(load_as(&bytes, DocumentFormat::Json).unwrap(), game);
}

#[test]
fn grid_is_recomputed_from_loaded_players() {
    // Built with two players, then grown to four; the grid stays small.
    let mut game = GameFixture::new().players(&["A", "B"]).build();
    game.add_player("C").unwrap();
    game.add_player("D").unwrap();
    assert_eq!(game.grid().as_tuple(), (4, 5));

    let reloaded = load(&dump(&game).unwrap()).unwrap();

    assert_eq!(reloaded.players(), game.players());
    assert_eq!(reloaded.grid().as_tuple(), (5, 6));
}

// ---------------------------------------------------------------------------
// Hand-written documents
// ---------------------------------------------------------------------------

#[test]
fn hand_written_document_loads() {
    let game = load(HAND_WRITTEN.as_bytes()).unwrap();

    assert_eq!(game.grid().as_tuple(), (4, 5));
    assert_eq!(game.player_index("Ana"), Some(0));
    assert_eq!(game.player_index("Bo"), Some(1));

    let ana = game.player("Ana").unwrap();
    assert_eq!(ana.items, vec![Item::new("Luck", "a four-leaf clover")]);
    assert_eq!((ana.position, ana.health, ana.power, ana.gold), (3, 85, 12, 40));
    assert_eq!(game.demons()[0].name, "Imp");
    assert_eq!(game.demons()[0].health, 30);
    assert_eq!(game.items().len(), 1);
}

#[test]
fn player_with_incomplete_item_fails_the_load() {
    let yaml = HAND_WRITTEN.replace("        description: a four-leaf clover\n        weight: 1\n", "");
    let err = load(yaml.as_bytes()).unwrap_err();
    assert!(matches!(
        err,
        CodecError::Game(GameError::Record(RecordError::MissingField {
            record: "item",
            field: "description"
        }))
    ));
}

#[test]
fn player_with_null_stat_fails_the_load() {
    let yaml = HAND_WRITTEN.replace("gold: 40", "gold: ~");
    let err = load(yaml.as_bytes()).unwrap_err();
    assert!(matches!(
        err,
        CodecError::Game(GameError::Record(RecordError::MissingField {
            record: "player",
            field: "gold"
        }))
    ));
}

#[test]
fn duplicate_player_names_fail_the_load() {
    let yaml = HAND_WRITTEN.replace("name: Bo", "name: Ana");
    let err = load(yaml.as_bytes()).unwrap_err();
    assert!(matches!(err, CodecError::Game(GameError::DuplicatePlayer(name)) if name == "Ana"));
}

#[test]
fn each_top_level_key_is_required() {
    for key in ["players", "demons", "items"] {
        let game = GameFixture::standard().build();
        let mut value: serde_json::Value =
            serde_json::from_slice(&dump_as(&game, DocumentFormat::Json).unwrap()).unwrap();
        value.as_object_mut().unwrap().remove(key);
        let bytes = serde_json::to_vec(&value).unwrap();

        let err = load_as(&bytes, DocumentFormat::Json).unwrap_err();

        assert!(
            matches!(
                &err,
                CodecError::Game(GameError::Record(RecordError::MissingField {
                    record: "game",
                    field,
                })) if *field == key
            ),
            "removing {key} gave {err:?}"
        );
    }
}

// ---------------------------------------------------------------------------
// Files
// ---------------------------------------------------------------------------

#[test]
fn save_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("campaign.yaml");
    std::fs::write(&path, "leftover content that is much longer than nothing").unwrap();

    let game = GameFixture::standard().build();
    save_game(&game, &path).unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), dump(&game).unwrap());
    assert_eq!(load_game(&path).unwrap(), game);
}

#[test]
fn json_extension_selects_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("campaign.json");
    let game = GameFixture::standard().build();

    save_game(&game, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.trim_start().starts_with('{'));
    assert_eq!(load_game(&path).unwrap(), game);
}

#[test]
fn corrupt_file_is_a_codec_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("campaign.yaml");
    std::fs::write(&path, "players: []\ndemons: []\n").unwrap();

    let err = load_game(&path).unwrap_err();
    assert!(matches!(err, StoreError::Codec(CodecError::Game(_))));
}

#[test]
fn loaded_game_accepts_further_mutation() {
    let mut game = load(HAND_WRITTEN.as_bytes()).unwrap();

    assert_eq!(game.add_player("Cy").unwrap(), 2);
    game.move_player("Cy", 5).unwrap();
    game.give_catalog_item("Bo", "Luck").unwrap();

    assert_eq!(game.player("Cy").unwrap().position, 5);
    assert!(game.player("Bo").unwrap().has_item("Luck"));
    assert_eq!(game.items().len(), 1);
}
