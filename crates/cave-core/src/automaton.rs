//! Automaton engine
//!
//! Advances the cave by discrete timesteps with the 4/5 smoothing rule
//! and records every generation it produces.

use crate::config::CaveConfig;
use crate::consts::{FLOOR_CONVERT_THRESHOLD, WALL_SURVIVE_THRESHOLD};
use crate::convergence::{self, Convergence};
use crate::errors::ConfigError;
use crate::grid::{CellState, Grid};
use crate::rng::CaveRng;

/// Compute the next generation from one immutable snapshot.
///
/// Every interior cell is evaluated against the previous generation
/// only, so no cell ever observes a partially-updated neighbor. Border
/// cells are carried over unchanged, which keeps them wall.
pub fn next_generation(grid: &Grid) -> Grid {
    let mut next = grid.clone();
    for x in 1..grid.width() - 1 {
        for y in 1..grid.height() - 1 {
            let walls = grid.wall_neighbor_count(x, y);
            let state = if grid.is_wall(x, y) && walls >= WALL_SURVIVE_THRESHOLD {
                CellState::Wall
            } else if grid.is_floor(x, y) && walls >= FLOOR_CONVERT_THRESHOLD {
                CellState::Wall
            } else {
                CellState::Floor
            };
            next.set(x, y, state);
        }
    }
    next
}

/// Cellular-automaton engine for cave generation.
///
/// Owns the full generation history. Index 0 is the random initial
/// grid; every `step()` appends one snapshot, whether or not it differs
/// from its predecessor.
#[derive(Debug, Clone)]
pub struct CaveAutomaton {
    history: Vec<Grid>,
    seed: Option<u64>,
}

impl CaveAutomaton {
    /// Create an engine with a freshly randomized initial grid.
    ///
    /// The config is validated before any generation happens; an
    /// invalid one is rejected with no partial state left behind.
    pub fn new(config: &CaveConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => CaveRng::new(seed),
            None => CaveRng::from_entropy(),
        };
        let initial = Grid::random(config.width, config.height, config.wall_fraction, &mut rng)?;
        Ok(Self {
            history: vec![initial],
            seed: Some(rng.seed()),
        })
    }

    /// Start from a prepared grid instead of a random one.
    pub fn from_grid(initial: Grid) -> Self {
        Self {
            history: vec![initial],
            seed: None,
        }
    }

    /// The current generation, i.e. the last snapshot appended.
    pub fn current(&self) -> &Grid {
        self.history
            .last()
            .expect("history always holds the initial generation")
    }

    /// Advance one timestep.
    ///
    /// Derives the next generation from the current snapshot and
    /// appends it. History grows by one per call even when the cave has
    /// already reached a fixed point.
    pub fn step(&mut self) {
        let next = next_generation(self.current());
        self.history.push(next);
    }

    /// Run `n_steps` sequential timesteps.
    pub fn run(&mut self, n_steps: u32) {
        for _ in 0..n_steps {
            self.step();
        }
    }

    /// Every generation produced so far, oldest first.
    pub fn history(&self) -> &[Grid] {
        &self.history
    }

    /// Consume the engine, yielding its recorded generations.
    pub fn into_history(self) -> Vec<Grid> {
        self.history
    }

    /// Number of recorded generations, the initial grid included.
    pub fn generations(&self) -> usize {
        self.history.len()
    }

    /// Seed behind the initial randomization, when one was drawn.
    ///
    /// `None` for engines started via [`CaveAutomaton::from_grid`].
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// First timestep at which the cave stopped changing.
    pub fn convergence(&self) -> Convergence {
        convergence::find_convergence(&self.history)
    }
}
