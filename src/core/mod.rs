//! Core types: grid, cells, coordinates, configuration, errors, RNG.
//!
//! Everything the engine and persistence layers share lives here.

pub mod config;
pub mod error;
pub mod grid;
pub mod rng;

pub use config::LifeConfig;
pub use error::{LifeError, Result};
pub use grid::{CellState, Coord, Grid};
pub use rng::LifeRng;
