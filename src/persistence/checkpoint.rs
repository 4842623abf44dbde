//! Full-state binary checkpoints.
//!
//! Unlike a grid document, which only carries the current generation, a
//! [`Checkpoint`] captures everything needed to resume a simulation exactly:
//! both generations, the generation count, and the generation cap. This keeps
//! `is_changing` and `is_max_generations_exceeded` answering the same way
//! after a restore.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Grid, LifeError, Result};
use crate::engine::GameOfLife;
use crate::rules::{ConwayRule, TransitionRule};

/// Serializable snapshot of an engine's state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Generation before the most recent step.
    pub previous: Grid,
    /// Live generation.
    pub current: Grid,
    /// Generations produced so far (at least 1).
    pub generation_count: u64,
    /// Generation cap, if any.
    pub max_generations: Option<u64>,
}

impl Checkpoint {
    /// Check the invariants an engine relies on.
    pub fn validate(&self) -> Result<()> {
        self.previous.validate()?;
        self.current.validate()?;

        if self.previous.dimensions() != self.current.dimensions() {
            return Err(LifeError::CorruptCheckpoint(format!(
                "previous generation is {:?}, current is {:?}",
                self.previous.dimensions(),
                self.current.dimensions()
            )));
        }
        if self.generation_count == 0 {
            return Err(LifeError::CorruptCheckpoint(
                "generation count must be at least 1".to_string(),
            ));
        }
        if self.max_generations == Some(0) {
            return Err(LifeError::CorruptCheckpoint(
                "max_generations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Encode a checkpoint with bincode.
pub fn encode_checkpoint(checkpoint: &Checkpoint) -> Result<Vec<u8>> {
    Ok(bincode::serialize(checkpoint)?)
}

/// Decode and validate a bincode checkpoint.
pub fn decode_checkpoint(bytes: &[u8]) -> Result<Checkpoint> {
    let checkpoint: Checkpoint = bincode::deserialize(bytes)?;
    checkpoint.validate()?;
    Ok(checkpoint)
}

impl GameOfLife<ConwayRule> {
    /// Rebuild a Conway engine from a checkpoint.
    pub fn from_checkpoint(checkpoint: Checkpoint) -> Result<Self> {
        Self::from_checkpoint_with_rule(checkpoint, ConwayRule)
    }
}

impl<R: TransitionRule> GameOfLife<R> {
    /// Rebuild an engine with a custom rule from a checkpoint.
    pub fn from_checkpoint_with_rule(checkpoint: Checkpoint, rule: R) -> Result<Self> {
        checkpoint.validate()?;
        Ok(Self {
            rule,
            previous: checkpoint.previous,
            current: checkpoint.current,
            generation_count: checkpoint.generation_count,
            max_generations: checkpoint.max_generations,
        })
    }

    /// Capture the engine's full state.
    #[must_use]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            previous: self.previous.clone(),
            current: self.current.clone(),
            generation_count: self.generation_count,
            max_generations: self.max_generations,
        }
    }

    /// Replace this engine's state with a checkpoint of the same dimensions.
    ///
    /// The engine is left untouched if the checkpoint is rejected.
    pub fn restore(&mut self, checkpoint: Checkpoint) -> Result<()> {
        checkpoint.validate()?;

        if checkpoint.current.dimensions() != self.current.dimensions() {
            return Err(LifeError::CorruptCheckpoint(format!(
                "checkpoint grid is {:?}, engine grid is {:?}",
                checkpoint.current.dimensions(),
                self.current.dimensions()
            )));
        }

        self.previous = checkpoint.previous;
        self.current = checkpoint.current;
        self.generation_count = checkpoint.generation_count;
        self.max_generations = checkpoint.max_generations;

        debug!(generation = self.generation_count, "Checkpoint restored");
        Ok(())
    }
}
