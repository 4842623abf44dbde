//! The simulation engine.
//!
//! ## Lifecycle
//!
//! 1. Construct with dimensions (random or empty first generation), or load
//!    a grid through [`crate::persistence`].
//! 2. Call [`GameOfLife::step`] repeatedly.
//! 3. Between steps, consult [`GameOfLife::is_changing`] and
//!    [`GameOfLife::is_max_generations_exceeded`] to decide when to stop,
//!    or let [`GameOfLife::run`] drive that loop.
//!
//! ```
//! use conway_life::{Coord, GameOfLife};
//!
//! let mut game = GameOfLife::new(5, 5, false, Some(3)).unwrap();
//! for coord in [Coord::new(2, 1), Coord::new(2, 2), Coord::new(2, 3)] {
//!     game.set_cell(coord, conway_life::CellState::Alive).unwrap();
//! }
//!
//! game.step();
//! assert!(game.is_changing());
//! assert_eq!(game.generation_count(), 2);
//! ```

use tracing::{debug, info};

use crate::core::{CellState, Coord, Grid, LifeConfig, LifeError, LifeRng, Result};
use crate::rules::{ConwayRule, TransitionRule};

/// Why [`GameOfLife::run`] stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The last step left the grid unchanged.
    Stable,
    /// The generation count reached `max_generations`.
    MaxGenerations,
    /// The caller's step limit was used up first.
    StepLimit,
}

/// Bounded-grid cellular automaton holding the current and previous generation.
///
/// Both generations are owned exclusively by the engine and always share the
/// same dimensions. `step` moves the current grid into `previous` and installs
/// a freshly built grid as `current`, so the two never alias.
#[derive(Clone, Debug)]
pub struct GameOfLife<R = ConwayRule> {
    pub(crate) rule: R,
    pub(crate) previous: Grid,
    pub(crate) current: Grid,
    pub(crate) generation_count: u64,
    pub(crate) max_generations: Option<u64>,
}

impl GameOfLife<ConwayRule> {
    /// Create an engine running Conway's rule.
    ///
    /// The first generation is randomized (each cell alive with probability
    /// 0.5, entropy-seeded) when `randomize` is set, otherwise all dead.
    pub fn new(rows: usize, cols: usize, randomize: bool, max_generations: Option<u64>) -> Result<Self> {
        let config = LifeConfig {
            rows,
            cols,
            randomize,
            max_generations,
            seed: None,
        };
        Self::from_config(&config)
    }

    /// Create an engine running Conway's rule from a config.
    pub fn from_config(config: &LifeConfig) -> Result<Self> {
        Self::with_rule(config, ConwayRule)
    }

    /// Create an engine running Conway's rule with `grid` as its first generation.
    ///
    /// The previous generation starts all dead.
    pub fn from_grid(grid: Grid, max_generations: Option<u64>) -> Result<Self> {
        Self::from_grid_with_rule(grid, max_generations, ConwayRule)
    }
}

impl<R: TransitionRule> GameOfLife<R> {
    /// Create an engine with a custom rule.
    pub fn with_rule(config: &LifeConfig, rule: R) -> Result<Self> {
        config.validate()?;

        let current = if config.randomize {
            let mut rng = match config.seed {
                Some(seed) => LifeRng::new(seed),
                None => LifeRng::from_entropy(),
            };
            debug!(seed = rng.seed(), "Randomizing initial generation");
            Grid::random(config.rows, config.cols, &mut rng)?
        } else {
            Grid::new(config.rows, config.cols)?
        };

        Self::from_grid_with_rule(current, config.max_generations, rule)
    }

    /// Create an engine with a custom rule and `grid` as its first generation.
    pub fn from_grid_with_rule(grid: Grid, max_generations: Option<u64>, rule: R) -> Result<Self> {
        if max_generations == Some(0) {
            return Err(LifeError::InvalidConfig(
                "max_generations must be at least 1".to_string(),
            ));
        }

        grid.validate()?;

        let (rows, cols) = grid.dimensions();
        let previous = Grid::new(rows, cols)?;
        debug!(rows, cols, live = grid.live_count(), ?max_generations, "Engine created");

        Ok(Self {
            rule,
            previous,
            current: grid,
            generation_count: 1,
            max_generations,
        })
    }

    // === Accessors ===

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.current.rows()
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.current.cols()
    }

    /// Generations produced so far, counting the initial grid as generation 1.
    #[must_use]
    pub fn generation_count(&self) -> u64 {
        self.generation_count
    }

    /// The configured generation cap, if any.
    #[must_use]
    pub fn max_generations(&self) -> Option<u64> {
        self.max_generations
    }

    /// The live grid.
    #[must_use]
    pub fn current_generation(&self) -> &Grid {
        &self.current
    }

    /// The grid as it was immediately before the last step.
    #[must_use]
    pub fn previous_generation(&self) -> &Grid {
        &self.previous
    }

    /// The transition rule in use.
    #[must_use]
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// State of a cell in the current generation.
    pub fn cell(&self, coord: Coord) -> Result<CellState> {
        self.current.get(coord)
    }

    /// Overwrite a cell in the current generation.
    ///
    /// Intended for seeding patterns before stepping.
    pub fn set_cell(&mut self, coord: Coord, state: CellState) -> Result<()> {
        self.current.set(coord, state)
    }

    /// Live cells in the current generation.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.current.live_count()
    }

    // === Simulation ===

    /// Count live Moore neighbours of a cell in the current generation.
    ///
    /// Off-grid positions are skipped, so corners see at most 3 neighbours
    /// and edges at most 5.
    pub fn count_live_neighbours(&self, coord: Coord) -> Result<usize> {
        self.current.live_neighbours(coord)
    }

    /// Compute the generation that follows the current one.
    ///
    /// Does not modify the engine or advance the generation count.
    #[must_use]
    pub fn compute_next_generation(&self) -> Grid {
        self.current
            .evolve(|state, live| self.rule.next_state(state, live))
    }

    /// Advance one generation.
    ///
    /// The current grid becomes the previous generation, the computed
    /// successor becomes current, and the generation count grows by one.
    pub fn step(&mut self) {
        let next = self.compute_next_generation();
        self.previous = std::mem::replace(&mut self.current, next);
        self.generation_count += 1;

        debug!(
            generation = self.generation_count,
            live = self.current.live_count(),
            "Generation advanced"
        );
    }

    /// Whether the last step changed at least one cell.
    ///
    /// Only the immediately preceding generation is compared, so oscillators
    /// with a period above 1 always report true.
    #[must_use]
    pub fn is_changing(&self) -> bool {
        self.previous != self.current
    }

    /// Whether the generation count equals `max_generations` exactly.
    ///
    /// Callers that skip a check on the matching generation will never see
    /// this return true; check after every step.
    #[must_use]
    pub fn is_max_generations_exceeded(&self) -> bool {
        self.max_generations == Some(self.generation_count)
    }

    /// Step until the grid stabilizes, the generation cap is hit, or
    /// `step_limit` steps have been taken.
    ///
    /// Both predicates are checked after every step. A grid already sitting
    /// at its generation cap returns `MaxGenerations` without stepping.
    /// Stability wins if both hold after the same step.
    pub fn run(&mut self, step_limit: u64) -> RunOutcome {
        let outcome = self.run_inner(step_limit);
        info!(
            ?outcome,
            generation = self.generation_count,
            live = self.current.live_count(),
            "Run finished"
        );
        outcome
    }

    fn run_inner(&mut self, step_limit: u64) -> RunOutcome {
        if self.is_max_generations_exceeded() {
            return RunOutcome::MaxGenerations;
        }

        for _ in 0..step_limit {
            self.step();
            if !self.is_changing() {
                return RunOutcome::Stable;
            }
            if self.is_max_generations_exceeded() {
                return RunOutcome::MaxGenerations;
            }
        }

        RunOutcome::StepLimit
    }
}
