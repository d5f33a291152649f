//! Sliding-Tile Cube Solver Library
//!
//! Provides A* search for the 26-tile sliding puzzle on a 3x3x3 cube, plus the
//! text formats used to read puzzles and write solution reports.

pub mod error;
pub mod frontier;
pub mod grid;
pub mod heuristic;
pub mod input;
pub mod moves;
pub mod node;
pub mod puzzle;
pub mod report;
pub mod solver;

use error::PuzzleError;
use grid::{Grid, GridKey};
use puzzle::{CubeOutcome, Puzzle};

/// Validates both grids and searches for a shortest path between them.
pub fn solve(initial: GridKey, goal: GridKey) -> Result<CubeOutcome, PuzzleError> {
    Ok(Puzzle::from_cells(initial, goal)?.solve())
}

/// Searches between two grids that are already known to be valid.
pub fn solve_grids(initial: Grid, goal: Grid) -> Result<CubeOutcome, PuzzleError> {
    Ok(Puzzle::new(initial, goal)?.solve())
}
