//! cave-core: Cellular-automaton cave generation
//!
//! This crate contains the automaton logic with no I/O dependencies.
//! It is designed to be pure and testable: a run randomizes one grid,
//! smooths it for a fixed number of timesteps while recording every
//! generation, and reports when the cave stopped changing.

pub mod automaton;
pub mod config;
pub mod convergence;
pub mod errors;
pub mod grid;

mod consts;
mod rng;

pub use automaton::{CaveAutomaton, next_generation};
pub use config::CaveConfig;
pub use consts::*;
pub use convergence::{Convergence, find_convergence};
pub use errors::ConfigError;
pub use grid::{CellState, Grid};
pub use rng::CaveRng;
