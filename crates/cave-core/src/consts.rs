//! Run parameters and transition-rule constants.

/// Default grid dimensions
pub const DEFAULT_WIDTH: usize = 40;
pub const DEFAULT_HEIGHT: usize = 40;

/// Default probability that an interior cell starts as wall
pub const DEFAULT_WALL_FRACTION: f64 = 0.45;

/// Default number of smoothing timesteps
pub const DEFAULT_STEPS: u32 = 15;

/// A wall cell stays a wall when at least this many of its 8 neighbors
/// are walls.
pub const WALL_SURVIVE_THRESHOLD: usize = 4;

/// A floor cell turns into a wall when at least this many of its 8
/// neighbors are walls. The asymmetry against [`WALL_SURVIVE_THRESHOLD`]
/// is what gives the caves their rounded, eroded look.
pub const FLOOR_CONVERT_THRESHOLD: usize = 5;
