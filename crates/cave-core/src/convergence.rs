//! Convergence detection over a generation history

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// Outcome of scanning a history for a fixed point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Convergence {
    /// Index of the first generation identical to its predecessor
    Converged(usize),
    /// No two adjacent generations in the history were identical
    NotConverged,
}

impl fmt::Display for Convergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Convergence::Converged(at) => write!(f, "converged after {at} iterations"),
            Convergence::NotConverged => write!(f, "did not converge"),
        }
    }
}

/// Find the earliest generation identical to its immediate predecessor.
///
/// A pure scan over the given history: compares adjacent snapshots
/// cell-by-cell, short-circuits on the first match, and never re-runs
/// the automaton. An empty or single-entry history cannot have
/// converged yet.
pub fn find_convergence(history: &[Grid]) -> Convergence {
    for i in 1..history.len() {
        if history[i] == history[i - 1] {
            return Convergence::Converged(i);
        }
    }
    Convergence::NotConverged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellState;
    use crate::rng::CaveRng;

    /// All-floor-interior grid with one extra wall at (1 + offset, 1).
    fn marked_grid(offset: usize) -> Grid {
        let mut rng = CaveRng::new(0);
        let mut grid = Grid::random(8, 8, 0.0, &mut rng).unwrap();
        grid.set(1 + offset, 1, CellState::Wall);
        grid
    }

    #[test]
    fn test_reports_first_adjacent_equal_pair() {
        // Generations 0-3 differ pairwise, 4 repeats 3.
        let history = vec![
            marked_grid(0),
            marked_grid(1),
            marked_grid(2),
            marked_grid(3),
            marked_grid(3),
        ];
        assert_eq!(find_convergence(&history), Convergence::Converged(4));
    }

    #[test]
    fn test_short_circuits_on_earliest_match() {
        // Identical pairs at 2 and 4; only the first one counts.
        let history = vec![
            marked_grid(0),
            marked_grid(1),
            marked_grid(1),
            marked_grid(2),
            marked_grid(2),
        ];
        assert_eq!(find_convergence(&history), Convergence::Converged(2));
    }

    #[test]
    fn test_no_adjacent_equals_is_not_converged() {
        let history = vec![marked_grid(0), marked_grid(1), marked_grid(2)];
        assert_eq!(find_convergence(&history), Convergence::NotConverged);
    }

    #[test]
    fn test_nonadjacent_repeat_does_not_count() {
        // 0 and 2 are identical but not adjacent.
        let history = vec![marked_grid(0), marked_grid(1), marked_grid(0)];
        assert_eq!(find_convergence(&history), Convergence::NotConverged);
    }

    #[test]
    fn test_short_histories_never_converge() {
        assert_eq!(find_convergence(&[]), Convergence::NotConverged);
        assert_eq!(
            find_convergence(&[marked_grid(0)]),
            Convergence::NotConverged
        );
    }

    #[test]
    fn test_display_summaries() {
        assert_eq!(
            Convergence::Converged(9).to_string(),
            "converged after 9 iterations"
        );
        assert_eq!(Convergence::NotConverged.to_string(), "did not converge");
    }

    #[test]
    fn test_serde_round_trip() {
        for value in [Convergence::Converged(3), Convergence::NotConverged] {
            let json = serde_json::to_string(&value).unwrap();
            let restored: Convergence = serde_json::from_str(&json).unwrap();
            assert_eq!(restored, value);
        }
    }
}
