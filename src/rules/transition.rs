//! Per-cell transition rules.

use crate::core::CellState;

/// Decides a cell's next state from its current state and live-neighbour count.
///
/// ## Implementation Notes
///
/// - `next_state` must be pure: the engine evaluates every cell against the
///   same pre-transition grid and relies on identical inputs giving
///   identical outputs.
/// - `live_neighbours` is at most 8, and lower on grid edges.
pub trait TransitionRule {
    /// Compute the next state of a single cell.
    fn next_state(&self, current: CellState, live_neighbours: usize) -> CellState;
}

/// Conway's standard rule, B3/S23.
///
/// - Dead cells with exactly 3 live neighbours are born.
/// - Live cells with 2 or 3 live neighbours survive.
/// - Every other cell is dead in the next generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConwayRule;

impl TransitionRule for ConwayRule {
    fn next_state(&self, current: CellState, live_neighbours: usize) -> CellState {
        match (current, live_neighbours) {
            (CellState::Dead, 3) => CellState::Alive,
            (CellState::Alive, 2 | 3) => CellState::Alive,
            _ => CellState::Dead,
        }
    }
}
