//! Simulation engine: generation bookkeeping, stepping, and stop predicates.

pub mod life;

pub use life::{GameOfLife, RunOutcome};
