//! # conway-life
//!
//! Conway's Game of Life on a bounded, non-wrapping grid.
//!
//! ## Design Principles
//!
//! 1. **Bounded Grid**: Cells beyond the edge are absent, not wrapped. Corner
//!    cells have 3 neighbours, edge cells 5, interior cells 8.
//!
//! 2. **Two Owned Generations**: The engine keeps the current generation and
//!    the one before it as independent grids, which is all change detection
//!    needs.
//!
//! 3. **Deterministic Stepping**: Randomness is used only to seed the first
//!    generation. Seeded configs reproduce the same grid every time.
//!
//! ## Modules
//!
//! - `core`: Grid, cells, coordinates, configuration, errors, RNG
//! - `rules`: `TransitionRule` trait and the standard Conway rule
//! - `engine`: The `GameOfLife` simulation engine
//! - `persistence`: JSON grid documents and binary checkpoints
//!
//! ## Example
//!
//! ```
//! use conway_life::{persistence, RunOutcome};
//!
//! let mut game = persistence::from_json_str("[[0,0,0,0],[0,1,1,0],[0,1,1,0],[0,0,0,0]]").unwrap();
//! assert_eq!(game.run(10), RunOutcome::Stable);
//! assert_eq!(game.generation_count(), 2);
//! ```

pub mod core;
pub mod engine;
pub mod persistence;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{CellState, Coord, Grid, LifeConfig, LifeError, LifeRng, Result};

pub use crate::engine::{GameOfLife, RunOutcome};

pub use crate::rules::{ConwayRule, TransitionRule};

pub use crate::persistence::{Checkpoint, GridDocument};
