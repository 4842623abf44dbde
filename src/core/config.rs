//! Simulation configuration.
//!
//! A `LifeConfig` describes how to build a fresh engine: grid size, whether
//! to randomize the first generation, an optional generation cap, and an
//! optional seed for reproducible randomization.

use serde::{Deserialize, Serialize};

use super::error::{LifeError, Result};

/// Engine construction parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Grid rows (must be at least 1).
    pub rows: usize,

    /// Grid columns (must be at least 1).
    pub cols: usize,

    /// Randomize the initial generation (each cell alive with probability 0.5).
    /// When false the initial generation is all dead.
    pub randomize: bool,

    /// Generation at which `is_max_generations_exceeded` reports true.
    /// `None` disables the check.
    pub max_generations: Option<u64>,

    /// Seed for the randomized initial generation.
    /// `None` draws a seed from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 20,
            randomize: true,
            max_generations: None,
            seed: None,
        }
    }
}

impl LifeConfig {
    /// Create a config for a grid of the given size with default settings.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Set whether the initial generation is randomized.
    #[must_use]
    pub fn with_randomize(mut self, randomize: bool) -> Self {
        self.randomize = randomize;
        self
    }

    /// Set the generation cap.
    #[must_use]
    pub fn with_max_generations(mut self, max: u64) -> Self {
        self.max_generations = Some(max);
        self
    }

    /// Set the randomization seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the config describes a constructible engine.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(LifeError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.max_generations == Some(0) {
            return Err(LifeError::InvalidConfig(
                "max_generations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
