//! Nested-array grid documents.
//!
//! A document is a JSON array of rows, each an array of `0`/`1` integers:
//!
//! ```json
//! [[0, 1, 0],
//!  [0, 1, 0],
//!  [0, 1, 0]]
//! ```
//!
//! There is no header. Dimensions come from the number of rows and the length
//! of the first row, and every other row must match it.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::{CellState, Grid, LifeError, Result};
use crate::engine::GameOfLife;
use crate::rules::TransitionRule;

/// In-memory form of a persisted grid: rows of 0/1 integers.
pub type GridDocument = Vec<Vec<i64>>;

/// Parse a document into a grid, rejecting empty, jagged, or non-binary input.
pub fn grid_from_document(doc: &[Vec<i64>]) -> Result<Grid> {
    let rows = doc
        .iter()
        .enumerate()
        .map(|(row, values)| {
            values
                .iter()
                .enumerate()
                .map(|(col, &value)| {
                    CellState::from_value(value)
                        .ok_or(LifeError::InvalidCellValue { row, col, value })
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    Grid::from_rows(&rows)
}

/// Render a grid as a document.
#[must_use]
pub fn grid_to_document(grid: &Grid) -> GridDocument {
    grid.iter_rows()
        .map(|row| row.iter().map(|cell| i64::from(cell.as_u8())).collect())
        .collect()
}

/// Build an engine whose current generation is the document's grid.
///
/// The previous generation starts all dead and the generation count at 1.
pub fn from_document(doc: &[Vec<i64>]) -> Result<GameOfLife> {
    let grid = grid_from_document(doc).inspect_err(|err| {
        warn!(%err, "Rejected grid document");
    })?;
    GameOfLife::from_grid(grid, None)
}

/// Serialize an engine's current generation as a document.
#[must_use]
pub fn to_document<R: TransitionRule>(game: &GameOfLife<R>) -> GridDocument {
    grid_to_document(game.current_generation())
}

/// Parse a JSON document string into an engine.
pub fn from_json_str(json: &str) -> Result<GameOfLife> {
    let doc: GridDocument = serde_json::from_str(json).inspect_err(|err| {
        warn!(%err, "Grid document is not a nested integer array");
    })?;
    from_document(&doc)
}

/// Serialize an engine's current generation as a JSON string.
pub fn to_json_string<R: TransitionRule>(game: &GameOfLife<R>) -> Result<String> {
    Ok(serde_json::to_string(&to_document(game))?)
}

/// Load an engine from a JSON grid file.
pub fn load(path: impl AsRef<Path>) -> Result<GameOfLife> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    let game = from_json_str(&json)?;
    debug!(path = %path.display(), rows = game.rows(), cols = game.cols(), "Grid loaded");
    Ok(game)
}

/// Write an engine's current generation to a JSON grid file.
pub fn save<R: TransitionRule>(game: &GameOfLife<R>, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, to_json_string(game)?)?;
    debug!(path = %path.display(), generation = game.generation_count(), "Grid saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coord;

    #[test]
    fn test_from_document() {
        let doc = vec![vec![0, 1, 0], vec![0, 1, 0]];
        let game = from_document(&doc).unwrap();

        assert_eq!((game.rows(), game.cols()), (2, 3));
        assert_eq!(game.generation_count(), 1);
        assert_eq!(game.cell(Coord::new(1, 1)).unwrap(), CellState::Alive);
        assert_eq!(game.live_count(), 2);
        assert_eq!(game.previous_generation().live_count(), 0);
    }

    #[test]
    fn test_to_document() {
        let grid = Grid::with_live_cells(2, 2, &[Coord::new(0, 1)]).unwrap();
        let game = GameOfLife::from_grid(grid, None).unwrap();
        assert_eq!(to_document(&game), vec![vec![0, 1], vec![0, 0]]);
    }

    #[test]
    fn test_empty_documents_rejected() {
        assert!(matches!(from_document(&[]), Err(LifeError::EmptyDocument)));
        assert!(matches!(from_document(&[vec![]]), Err(LifeError::EmptyDocument)));
    }

    #[test]
    fn test_jagged_document_rejected() {
        let doc = vec![vec![0, 0, 0], vec![0, 0], vec![0, 0, 0]];
        assert!(matches!(
            from_document(&doc),
            Err(LifeError::JaggedRow { row: 1, expected: 3, found: 2 })
        ));

        let doc = vec![vec![0], vec![0, 1]];
        assert!(matches!(
            from_document(&doc),
            Err(LifeError::JaggedRow { row: 1, expected: 1, found: 2 })
        ));
    }

    #[test]
    fn test_non_binary_value_rejected() {
        let doc = vec![vec![0, 1], vec![2, 0]];
        assert!(matches!(
            from_document(&doc),
            Err(LifeError::InvalidCellValue { row: 1, col: 0, value: 2 })
        ));
        assert!(from_document(&[vec![-1]]).is_err());
    }

    #[test]
    fn test_json_string_round_trip() {
        let game = from_json_str("[[1,0,1],[0,1,0]]").unwrap();
        assert_eq!(to_json_string(&game).unwrap(), "[[1,0,1],[0,1,0]]");
    }

    #[test]
    fn test_malformed_json_rejected() {
        for bad in ["", "{}", "[1, 0]", "[[0, \"1\"]]", "[[0.5]]", "null"] {
            let err = from_json_str(bad).unwrap_err();
            assert!(err.is_format_error(), "{bad:?} gave {err}");
        }
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "conway_life_document_{}_{:?}.json",
            std::process::id(),
            std::thread::current().id(),
        ));

        let grid = Grid::with_live_cells(3, 4, &[Coord::new(0, 0), Coord::new(2, 3)]).unwrap();
        let game = GameOfLife::from_grid(grid, None).unwrap();
        save(&game, &path).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.current_generation(), game.current_generation());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("conway_life_document_does_not_exist.json");
        assert!(matches!(load(path), Err(LifeError::Io(_))));
    }
}
