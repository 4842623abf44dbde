//! Dense cell grid and coordinates.
//!
//! ## Layout
//!
//! A [`Grid`] stores `rows * cols` cells in a single row-major `Vec`.
//! Dimensions are fixed at construction and are always at least 1x1.
//!
//! The grid is bounded: it does not wrap, so cells on an edge simply have
//! fewer neighbours (3 for a corner, 5 for an edge, 8 for the interior).
//!
//! ```
//! use conway_life::core::{CellState, Coord, Grid};
//!
//! let mut grid = Grid::new(3, 3).unwrap();
//! grid.set(Coord::new(1, 1), CellState::Alive).unwrap();
//!
//! assert_eq!(grid.live_count(), 1);
//! assert_eq!(grid.neighbours(Coord::new(0, 0)).count(), 3);
//! assert_eq!(grid.live_neighbours(Coord::new(0, 0)).unwrap(), 1);
//! ```

use serde::{Deserialize, Serialize};

use super::error::{LifeError, Result};
use super::rng::LifeRng;

/// Relative offsets of the Moore neighbourhood, excluding the cell itself.
const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// State of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellState {
    /// Dead cell, persisted as `0`.
    #[default]
    Dead = 0,
    /// Live cell, persisted as `1`.
    Alive = 1,
}

impl CellState {
    /// Check if the cell is alive.
    #[must_use]
    pub const fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    /// Persisted integer form (0 or 1).
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Parse a persisted integer. Returns `None` for anything but 0 or 1.
    #[must_use]
    pub const fn from_value(value: i64) -> Option<Self> {
        match value {
            0 => Some(CellState::Dead),
            1 => Some(CellState::Alive),
            _ => None,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

/// A `(row, col)` position on a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row index (0-based).
    pub row: usize,
    /// Column index (0-based).
    pub col: usize,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offset this coordinate, returning `None` if either axis would go negative.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Rectangular, non-wrapping grid of cells.
///
/// Cloning a grid produces a fully independent copy. Deserialized grids are
/// validated, so a cell count that disagrees with the dimensions is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

/// Unvalidated wire form of a [`Grid`].
#[derive(Deserialize)]
struct RawGrid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = LifeError;

    fn try_from(raw: RawGrid) -> Result<Self> {
        let grid = Grid {
            rows: raw.rows,
            cols: raw.cols,
            cells: raw.cells,
        };
        grid.validate()?;
        Ok(grid)
    }
}

impl Grid {
    /// Create an all-dead grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let len = Self::check_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![CellState::Dead; len],
        })
    }

    /// Create a grid where every cell is independently alive with probability 0.5.
    pub fn random(rows: usize, cols: usize, rng: &mut LifeRng) -> Result<Self> {
        let len = Self::check_dimensions(rows, cols)?;
        let cells = (0..len)
            .map(|_| CellState::from(rng.gen_bool(0.5)))
            .collect();
        Ok(Self { rows, cols, cells })
    }

    /// Create an all-dead grid with the given cells set alive.
    pub fn with_live_cells(rows: usize, cols: usize, live: &[Coord]) -> Result<Self> {
        let mut grid = Self::new(rows, cols)?;
        for &coord in live {
            grid.set(coord, CellState::Alive)?;
        }
        Ok(grid)
    }

    /// Build a grid from row-major nested rows.
    ///
    /// Fails with `EmptyDocument` if there are no rows or the first row is
    /// empty, and with `JaggedRow` if any row differs in length from the first.
    pub fn from_rows<R: AsRef<[CellState]>>(rows: &[R]) -> Result<Self> {
        let first = rows.first().ok_or(LifeError::EmptyDocument)?;
        let cols = first.as_ref().len();
        if cols == 0 {
            return Err(LifeError::EmptyDocument);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(LifeError::JaggedRow {
                    row: index,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Returns the cell count for valid dimensions.
    fn check_dimensions(rows: usize, cols: usize) -> Result<usize> {
        if rows == 0 || cols == 0 {
            return Err(LifeError::InvalidDimensions { rows, cols });
        }
        rows.checked_mul(cols)
            .ok_or(LifeError::InvalidDimensions { rows, cols })
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Check if a coordinate lies on the grid.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    fn index_of(&self, coord: Coord) -> Result<usize> {
        if !self.contains(coord) {
            return Err(LifeError::OutOfBounds {
                row: coord.row,
                col: coord.col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(coord.row * self.cols + coord.col)
    }

    /// Get the state of a cell.
    pub fn get(&self, coord: Coord) -> Result<CellState> {
        let index = self.index_of(coord)?;
        Ok(self.cells[index])
    }

    /// Set the state of a cell.
    pub fn set(&mut self, coord: Coord, state: CellState) -> Result<()> {
        let index = self.index_of(coord)?;
        self.cells[index] = state;
        Ok(())
    }

    /// Iterate over the in-bounds Moore neighbours of a coordinate.
    ///
    /// Positions off the grid are skipped rather than wrapped.
    pub fn neighbours(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        NEIGHBOUR_OFFSETS
            .iter()
            .filter_map(move |&(d_row, d_col)| coord.offset(d_row, d_col))
            .filter(move |&neighbour| self.contains(neighbour))
    }

    /// Count the live cells among a coordinate's neighbours.
    pub fn live_neighbours(&self, coord: Coord) -> Result<usize> {
        self.index_of(coord)?;
        Ok(self.count_live_neighbours(coord))
    }

    // Caller guarantees `coord` is in bounds.
    fn count_live_neighbours(&self, coord: Coord) -> usize {
        self.neighbours(coord)
            .filter(|&n| self.cells[n.row * self.cols + n.col].is_alive())
            .count()
    }

    /// Build the next grid by applying `f(state, live_neighbours)` to every cell.
    ///
    /// All neighbour counts are taken from `self`, never from the grid being
    /// built, so the result does not depend on iteration order.
    pub fn evolve<F>(&self, mut f: F) -> Grid
    where
        F: FnMut(CellState, usize) -> CellState,
    {
        let cells = self
            .coords()
            .zip(self.cells.iter())
            .map(|(coord, &state)| f(state, self.count_live_neighbours(coord)))
            .collect();
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Number of live cells on the grid.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Coord::new(row, col)))
    }

    /// Iterate over the rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.cols)
    }

    /// Row-major view of all cells.
    #[must_use]
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Check that the cell count matches the dimensions.
    pub(crate) fn validate(&self) -> Result<()> {
        let expected = Self::check_dimensions(self.rows, self.cols)?;
        if self.cells.len() != expected {
            return Err(LifeError::CellCountMismatch {
                rows: self.rows,
                cols: self.cols,
                found: self.cells.len(),
            });
        }
        Ok(())
    }
}
