//! Textual puzzle layout.
//!
//! An input file holds six 3x3 blocks of whitespace-separated labels,
//! separated by blank lines. The first three blocks are the initial layers
//! (top to bottom), the last three the goal layers. `0` marks the blank.
//!
//! ```text
//! 1 2 3
//! 4 5 6
//! 7 8 9
//!
//! 10 11 12
//! ...
//! ```

use std::fs;
use std::path::Path;

use crate::error::{Error, ParseError};
use crate::grid::{Grid, BLANK, DIM, GRID_SIZE};
use crate::puzzle::Puzzle;

/// Layers per file: initial then goal.
const LAYER_COUNT: usize = 2 * DIM;

/// A run of consecutive non-empty lines.
struct Block<'a> {
    /// 1-based line number of the first row.
    first_line: usize,
    rows: Vec<(usize, &'a str)>,
}

/// Splits text into blocks separated by one or more blank lines.
fn blocks(text: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut current: Option<Block<'_>> = None;

    for (offset, line) in text.lines().enumerate() {
        let line_number = offset + 1;
        if line.trim().is_empty() {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
            continue;
        }
        current
            .get_or_insert_with(|| Block {
                first_line: line_number,
                rows: Vec::new(),
            })
            .rows
            .push((line_number, line));
    }

    if let Some(block) = current {
        blocks.push(block);
    }
    blocks
}

/// Parses one row of labels.
fn parse_row(line_number: usize, line: &str) -> Result<[u8; DIM], ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != DIM {
        return Err(ParseError::RowWidth {
            line: line_number,
            expected: DIM,
            found: tokens.len(),
        });
    }

    let mut row = [BLANK; DIM];
    for (cell, token) in row.iter_mut().zip(tokens) {
        *cell = token.parse().map_err(|_| ParseError::InvalidCell {
            line: line_number,
            token: token.to_string(),
        })?;
    }
    Ok(row)
}

/// Parses both configurations and validates them as a puzzle.
pub fn parse(text: &str) -> Result<Puzzle, ParseError> {
    let blocks = blocks(text);
    if blocks.len() != LAYER_COUNT {
        return Err(ParseError::LayerCount {
            expected: LAYER_COUNT,
            found: blocks.len(),
        });
    }

    let mut cells = [[BLANK; GRID_SIZE]; 2];
    for (layer_index, block) in blocks.iter().enumerate() {
        if block.rows.len() != DIM {
            return Err(ParseError::LayerHeight {
                line: block.first_line,
                expected: DIM,
                found: block.rows.len(),
            });
        }

        let grid = layer_index / DIM;
        let layer = layer_index % DIM;
        for (row_index, &(line_number, line)) in block.rows.iter().enumerate() {
            let row = parse_row(line_number, line)?;
            let start = layer * DIM * DIM + row_index * DIM;
            cells[grid][start..start + DIM].copy_from_slice(&row);
        }
    }

    let [initial, goal] = cells;
    Ok(Puzzle::from_cells(initial, goal)?)
}

/// Reads and parses a puzzle file.
pub fn load(path: &Path) -> Result<Puzzle, Error> {
    let display = path.display().to_string();
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: display.clone(),
        source,
    })?;
    parse(&text).map_err(|source| Error::Parse {
        path: display,
        source,
    })
}

/// Renders a grid as three blocks of rows, the inverse of the parser.
pub fn layout(grid: &Grid) -> String {
    let mut layers = Vec::with_capacity(DIM);
    for layer in grid.cells().chunks(DIM * DIM) {
        let rows: Vec<String> = layer
            .chunks(DIM)
            .map(|row| {
                row.iter()
                    .map(|label| label.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        layers.push(rows.join("\n"));
    }
    layers.join("\n\n")
}

/// Renders a puzzle in the input file format.
pub fn to_text(puzzle: &Puzzle) -> String {
    format!("{}\n\n{}\n", layout(puzzle.initial()), layout(puzzle.goal()))
}
