//! Manhattan-distance heuristic over the full cube.
//!
//! Each move slides exactly one tile by one cell, so the summed 3D Manhattan
//! distance drops by at most one per move. That makes it admissible and
//! consistent under unit move cost.

use crate::grid::{idx_to_coord, Coord, Grid, BLANK};

/// Marker for labels that do not occur in the goal.
const ABSENT: u8 = u8::MAX;

/// Manhattan distance between two cells, counting layer, row and column steps.
#[inline(always)]
pub fn manhattan_distance(a: Coord, b: Coord) -> u32 {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1) + a.2.abs_diff(b.2)
}

/// Lower bound on the number of moves from `state` to `goal`.
///
/// The blank contributes nothing. Labels missing from `goal` are ignored;
/// validated puzzles never contain them.
pub fn heuristic(state: &Grid, goal: &Grid) -> u32 {
    GoalPositions::new(goal).estimate(state)
}

/// Goal cell index of every label, precomputed once per search.
#[derive(Clone)]
pub struct GoalPositions {
    positions: [u8; 256],
}

impl GoalPositions {
    pub fn new(goal: &Grid) -> Self {
        let mut positions = [ABSENT; 256];
        for (idx, &label) in goal.cells().iter().enumerate() {
            positions[label as usize] = idx as u8;
        }
        Self { positions }
    }

    /// Sums the per-tile Manhattan distances from `state` to the goal.
    #[inline]
    pub fn estimate(&self, state: &Grid) -> u32 {
        state
            .cells()
            .iter()
            .enumerate()
            .filter(|&(_, &label)| label != BLANK)
            .filter_map(|(idx, &label)| {
                let target = self.positions[label as usize];
                (target != ABSENT)
                    .then(|| manhattan_distance(idx_to_coord(idx), idx_to_coord(target as usize)))
            })
            .sum()
    }
}
