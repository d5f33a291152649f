//! Solution report.
//!
//! Layout:
//! - the initial layers, as in the input file
//! - a blank line, then the goal layers
//! - a blank line, then four lines: depth, nodes generated, the action
//!   letters and the f-values, the last two separated by spaces

use std::fs;
use std::path::Path;

use crate::error::Error;
use crate::grid::Grid;
use crate::input::layout;
use crate::moves::Move;
use crate::puzzle::Puzzle;
use crate::solver::Solution;

/// Builds the report text for a solved puzzle.
pub fn render(puzzle: &Puzzle, solution: &Solution<Move, Grid>) -> String {
    let actions: Vec<String> = solution.actions.iter().map(Move::to_string).collect();
    let f_values: Vec<String> = solution.f_values.iter().map(u32::to_string).collect();

    format!(
        "{}\n\n{}\n\n{}\n{}\n{}\n{}\n",
        layout(puzzle.initial()),
        layout(puzzle.goal()),
        solution.depth,
        solution.nodes_generated,
        actions.join(" "),
        f_values.join(" "),
    )
}

/// Writes a report to `path`.
pub fn save(path: &Path, report: &str) -> Result<(), Error> {
    fs::write(path, report).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })
}
