//! Cave grid and cell states

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::errors::ConfigError;
use crate::rng::CaveRng;

/// State of a single cave cell
///
/// Two variants only; a cell holding anything else is unrepresentable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum CellState {
    #[default]
    Wall = 1,
    Floor = 0,
}

impl CellState {
    /// Check if this cell is wall
    pub const fn is_wall(&self) -> bool {
        matches!(self, CellState::Wall)
    }

    /// Check if this cell is floor
    pub const fn is_floor(&self) -> bool {
        matches!(self, CellState::Floor)
    }

    /// Get the display character for this cell state
    pub const fn symbol(&self) -> char {
        match self {
            CellState::Wall => '#',
            CellState::Floor => ' ',
        }
    }
}

/// Moore-neighborhood offsets in scan order: the row above, the two
/// horizontal neighbors, the row below.
const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A fixed-size cave grid with a permanent wall border.
///
/// Cells are indexed `[x][y]` with `0 <= x < width`, `0 <= y < height`.
/// The outer border row and column are wall in every grid this crate
/// produces. Once a grid lands in an automaton's history it is never
/// touched again; each timestep derives a fresh grid from the previous
/// snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<CellState>>,
}

impl Grid {
    /// Create a random grid.
    ///
    /// Every interior cell takes one uniform draw from [0, 1) and becomes
    /// wall when the draw is at most `wall_fraction`. Border cells are
    /// wall regardless of any draw.
    pub fn random(
        width: usize,
        height: usize,
        wall_fraction: f64,
        rng: &mut CaveRng,
    ) -> Result<Self, ConfigError> {
        if width < 3 || height < 3 {
            return Err(ConfigError::DimensionsTooSmall { width, height });
        }
        if !(0.0..=1.0).contains(&wall_fraction) {
            return Err(ConfigError::WallFractionOutOfRange(wall_fraction));
        }

        let mut cells = vec![vec![CellState::Wall; height]; width];
        for x in 1..width - 1 {
            for y in 1..height - 1 {
                cells[x][y] = if rng.fraction() <= wall_fraction {
                    CellState::Wall
                } else {
                    CellState::Floor
                };
            }
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Grid width in cells
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    pub fn height(&self) -> usize {
        self.height
    }

    /// State of the cell at (x, y)
    pub fn cell(&self, x: usize, y: usize) -> CellState {
        self.cells[x][y]
    }

    /// Check if the cell at (x, y) is wall
    pub fn is_wall(&self, x: usize, y: usize) -> bool {
        self.cells[x][y].is_wall()
    }

    /// Check if the cell at (x, y) is floor
    pub fn is_floor(&self, x: usize, y: usize) -> bool {
        self.cells[x][y].is_floor()
    }

    /// Check if (x, y) lies on the outer border row or column
    pub fn is_border(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1
    }

    /// Check if (x, y) has a full Moore neighborhood inside the grid
    pub fn is_interior(&self, x: usize, y: usize) -> bool {
        x >= 1 && y >= 1 && x <= self.width - 2 && y <= self.height - 2
    }

    /// The 8 Moore-neighborhood states around an interior cell, in a
    /// fixed scan order.
    ///
    /// Only the wall count matters to the transition rule, so the order
    /// is stable but otherwise arbitrary. Must only be called for
    /// interior cells.
    pub fn neighbor_states(&self, x: usize, y: usize) -> [CellState; 8] {
        debug_assert!(
            self.is_interior(x, y),
            "neighbor_states called on border cell ({x}, {y})"
        );
        let mut states = [CellState::Wall; 8];
        for (state, (dx, dy)) in states.iter_mut().zip(MOORE_OFFSETS) {
            let nx = (x as i32 + dx) as usize;
            let ny = (y as i32 + dy) as usize;
            *state = self.cells[nx][ny];
        }
        states
    }

    /// Count of wall cells among the 8 Moore neighbors of an interior
    /// cell, in [0, 8].
    pub fn wall_neighbor_count(&self, x: usize, y: usize) -> usize {
        self.neighbor_states(x, y)
            .iter()
            .filter(|state| state.is_wall())
            .count()
    }

    /// Overwrite one cell while deriving the next generation.
    ///
    /// Crate-internal: published grids are immutable snapshots. The
    /// engine only writes interior cells, which keeps the border wall.
    pub(crate) fn set(&mut self, x: usize, y: usize, state: CellState) {
        debug_assert!(
            self.is_interior(x, y),
            "set called on border cell ({x}, {y})"
        );
        self.cells[x][y] = state;
    }
}
