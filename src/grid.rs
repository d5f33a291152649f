//! Grid representation for the 3x3x3 sliding-tile cube.
//!
//! The grid is a flat array in layer-major order where each cell holds a
//! tile label (1-based) or 0 for the blank. The flat array doubles as the
//! canonical key used for duplicate suppression during search.

use std::fmt;

use crate::error::GridError;

/// Cells per axis.
pub const DIM: usize = 3;

/// Number of cells in the 3x3x3 grid.
pub const GRID_SIZE: usize = DIM * DIM * DIM;

/// Label stored in the blank cell.
pub const BLANK: u8 = 0;

/// A cell position as `(layer, row, col)`.
pub type Coord = (i32, i32, i32);

/// Flattened cell contents, hashed and compared as the canonical state key.
pub type GridKey = [u8; GRID_SIZE];

/// Converts (layer, row, col) coordinates to a linear cell index.
///
/// Index order is layer-major: `idx = layer * DIM * DIM + row * DIM + col`.
#[inline(always)]
pub const fn coord_to_idx(layer: i32, row: i32, col: i32) -> usize {
    (layer as usize) * DIM * DIM + (row as usize) * DIM + (col as usize)
}

/// Converts a linear cell index to (layer, row, col) coordinates.
#[inline(always)]
pub const fn idx_to_coord(cell_index: usize) -> Coord {
    (
        (cell_index / (DIM * DIM)) as i32,
        ((cell_index / DIM) % DIM) as i32,
        (cell_index % DIM) as i32,
    )
}

/// Returns `true` if every component lies in `0..DIM`.
#[inline(always)]
pub const fn in_bounds((layer, row, col): Coord) -> bool {
    let dim = DIM as i32;
    layer >= 0 && layer < dim && row >= 0 && row < dim && col >= 0 && col < dim
}

/// One configuration of the cube.
///
/// Always holds exactly one blank and no repeated label; construction goes
/// through [`Grid::new`], which checks both.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: GridKey,
    /// Cached index of the blank cell.
    blank: u8,
}

impl Grid {
    /// Validates a flat cell array and wraps it as a grid.
    pub fn new(cells: GridKey) -> Result<Self, GridError> {
        let blanks = cells.iter().filter(|&&label| label == BLANK).count();
        if blanks != 1 {
            return Err(GridError::BlankCount { found: blanks });
        }

        let mut seen = [false; 256];
        for &label in &cells {
            if label == BLANK {
                continue;
            }
            if seen[label as usize] {
                return Err(GridError::DuplicateLabel { label });
            }
            seen[label as usize] = true;
        }

        let blank = cells
            .iter()
            .position(|&label| label == BLANK)
            .ok_or(GridError::BlankCount { found: 0 })?;

        Ok(Self {
            cells,
            blank: blank as u8,
        })
    }

    /// Builds a grid from nested `[layer][row][col]` arrays.
    pub fn from_layers(layers: [[[u8; DIM]; DIM]; DIM]) -> Result<Self, GridError> {
        let mut cells = [BLANK; GRID_SIZE];
        for (layer, rows) in layers.iter().enumerate() {
            for (row, labels) in rows.iter().enumerate() {
                for (col, &label) in labels.iter().enumerate() {
                    cells[coord_to_idx(layer as i32, row as i32, col as i32)] = label;
                }
            }
        }
        Self::new(cells)
    }

    /// The ordered cube: labels 1..=26 in index order, blank in the last cell.
    pub fn solved() -> Self {
        let mut cells = [BLANK; GRID_SIZE];
        for (idx, cell) in cells.iter_mut().enumerate().take(GRID_SIZE - 1) {
            *cell = idx as u8 + 1;
        }
        Self {
            cells,
            blank: (GRID_SIZE - 1) as u8,
        }
    }

    /// The canonical key: the flattened cell sequence.
    #[inline]
    pub fn key(&self) -> GridKey {
        self.cells
    }

    #[inline]
    pub fn cells(&self) -> &GridKey {
        &self.cells
    }

    /// Label at the given coordinates.
    #[inline]
    pub fn get(&self, (layer, row, col): Coord) -> u8 {
        self.cells[coord_to_idx(layer, row, col)]
    }

    #[inline]
    pub fn blank_idx(&self) -> usize {
        self.blank as usize
    }

    #[inline]
    pub fn blank_coord(&self) -> Coord {
        idx_to_coord(self.blank as usize)
    }

    /// Index of the cell holding `label`, if present.
    pub fn position_of(&self, label: u8) -> Option<usize> {
        self.cells.iter().position(|&cell| cell == label)
    }

    /// Non-blank labels in ascending order.
    pub fn sorted_labels(&self) -> Vec<u8> {
        let mut labels: Vec<u8> = self
            .cells
            .iter()
            .copied()
            .filter(|&label| label != BLANK)
            .collect();
        labels.sort_unstable();
        labels
    }

    /// Returns a copy with the blank moved to `target`, sliding the tile
    /// there into the blank's old cell.
    #[inline]
    pub(crate) fn with_blank_at(&self, target: usize) -> Self {
        let mut cells = self.cells;
        cells.swap(self.blank as usize, target);
        Self {
            cells,
            blank: target as u8,
        }
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({:?})", self.cells)
    }
}

/// Displays the three layers side by side, rows from top to bottom.
///
/// Blank cells show as '.'.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_grid(self))
    }
}

/// Formats a grid as a human-readable string with layers side by side.
pub fn format_grid(grid: &Grid) -> String {
    // each cell is two characters wide plus one separator
    let layer_width = DIM * 3 - 1;

    let mut output = String::new();
    let mut header = String::new();
    for layer in 0..DIM {
        if layer > 0 {
            header.push_str("  ");
        }
        header.push_str(&format!("L={:<width$}", layer, width = layer_width - 2));
    }
    output.push_str(header.trim_end());
    output.push('\n');

    for row in 0..DIM {
        let mut line = String::new();
        for layer in 0..DIM {
            if layer > 0 {
                line.push_str("  ");
            }
            for col in 0..DIM {
                if col > 0 {
                    line.push(' ');
                }
                let label = grid.get((layer as i32, row as i32, col as i32));
                if label == BLANK {
                    line.push_str(" .");
                } else {
                    line.push_str(&format!("{label:>2}"));
                }
            }
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}
