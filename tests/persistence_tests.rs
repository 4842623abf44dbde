//! Persistence integration tests.
//!
//! These tests cover the JSON grid document format end to end, including
//! files on disk, and binary checkpoints of a running simulation.

use std::path::PathBuf;

use conway_life::persistence::{self, decode_checkpoint, encode_checkpoint};
use conway_life::{Coord, GameOfLife, LifeConfig, LifeError};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "conway_life_{}_{}_{:?}.json",
        name,
        std::process::id(),
        std::thread::current().id(),
    ))
}

// =============================================================================
// Documents
// =============================================================================

/// A saved random grid loads back cell for cell.
#[test]
fn test_random_grid_file_round_trip() {
    let path = temp_path("random");
    let game = GameOfLife::from_config(&LifeConfig::new(13, 7).with_seed(2024)).unwrap();

    persistence::save(&game, &path).unwrap();
    let loaded = persistence::load(&path).unwrap();

    assert_eq!(loaded.current_generation(), game.current_generation());
    assert_eq!((loaded.rows(), loaded.cols()), (13, 7));

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_all_zero_and_all_one_round_trip() {
    for value in [0, 1] {
        let doc = vec![vec![value; 4]; 3];
        let game = persistence::from_document(&doc).unwrap();
        assert_eq!(persistence::to_document(&game), doc);
        assert_eq!(game.live_count(), if value == 1 { 12 } else { 0 });
    }
}

/// The on-disk format is a bare nested array with no metadata.
#[test]
fn test_saved_file_is_bare_nested_array() {
    let path = temp_path("format");
    let game = persistence::from_document(&[vec![1, 0], vec![0, 1], vec![1, 1]]).unwrap();

    persistence::save(&game, &path).unwrap();
    let raw = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(parsed, serde_json::json!([[1, 0], [0, 1], [1, 1]]));

    std::fs::remove_file(&path).ok();
}

/// A loaded engine starts at generation 1 with an all-dead previous grid,
/// and then evolves normally.
#[test]
fn test_loaded_engine_steps() {
    let doc = vec![
        vec![0, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0],
        vec![0, 1, 1, 1, 0],
        vec![0, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0],
    ];
    let mut game = persistence::from_document(&doc).unwrap();

    assert_eq!(game.generation_count(), 1);
    assert_eq!(game.previous_generation().live_count(), 0);
    assert!(game.is_changing());
    assert_eq!(game.max_generations(), None);

    game.step();
    game.step();
    assert_eq!(persistence::to_document(&game), doc);
}

/// Saving after steps writes the current generation, not the original.
#[test]
fn test_save_writes_current_generation() {
    let mut game = persistence::from_json_str("[[0,0,0],[1,1,1],[0,0,0]]").unwrap();
    game.step();
    assert_eq!(
        persistence::to_json_string(&game).unwrap(),
        "[[0,1,0],[0,1,0],[0,1,0]]"
    );
}

#[test]
fn test_rejected_documents() {
    let cases = [
        ("[]", "empty"),
        ("[[]]", "empty first row"),
        ("[[0,1],[0]]", "jagged"),
        ("[[0,1],[0,1,1]]", "jagged long"),
        ("[[0,3]]", "non-binary"),
        ("[[true,false]]", "booleans"),
        ("not json", "garbage"),
    ];

    for (json, label) in cases {
        match persistence::from_json_str(json) {
            Ok(_) => panic!("{label}: document {json} was accepted"),
            Err(err) => assert!(err.is_format_error(), "{label}: unexpected error {err}"),
        }
    }
}

#[test]
fn test_load_invalid_file() {
    let path = temp_path("invalid");
    std::fs::write(&path, "[[0, 1], [1]]").unwrap();

    assert!(matches!(
        persistence::load(&path),
        Err(LifeError::JaggedRow { row: 1, expected: 2, found: 1 })
    ));

    std::fs::remove_file(&path).ok();
}

// =============================================================================
// Checkpoints
// =============================================================================

/// A checkpoint taken mid-run resumes with identical predicates and evolution.
#[test]
fn test_checkpoint_mid_run() {
    let config = LifeConfig::new(16, 16).with_seed(77).with_max_generations(30);
    let mut game = GameOfLife::from_config(&config).unwrap();
    for _ in 0..10 {
        game.step();
    }

    let bytes = encode_checkpoint(&game.checkpoint()).unwrap();
    let mut resumed = GameOfLife::from_checkpoint(decode_checkpoint(&bytes).unwrap()).unwrap();

    assert_eq!(resumed.generation_count(), 11);
    assert_eq!(resumed.is_changing(), game.is_changing());

    let original = game.run(100);
    let replayed = resumed.run(100);
    assert_eq!(original, replayed);
    assert_eq!(resumed.generation_count(), game.generation_count());
    assert_eq!(resumed.current_generation(), game.current_generation());
}

#[test]
fn test_document_drops_history_checkpoint_keeps_it() {
    let mut game = persistence::from_json_str("[[1,1],[1,1]]").unwrap();
    game.step();
    assert!(!game.is_changing());

    // A document reload forgets the previous generation
    let reloaded = persistence::from_document(&persistence::to_document(&game)).unwrap();
    assert!(reloaded.is_changing());
    assert_eq!(reloaded.generation_count(), 1);

    // A checkpoint does not
    let restored = GameOfLife::from_checkpoint(game.checkpoint()).unwrap();
    assert!(!restored.is_changing());
    assert_eq!(restored.generation_count(), 2);
    assert_eq!(restored.cell(Coord::new(1, 1)).unwrap(), game.cell(Coord::new(1, 1)).unwrap());
}
