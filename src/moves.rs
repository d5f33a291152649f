//! Blank moves and successor generation.
//!
//! The blank can slide in six directions: East/West along a row,
//! North/South along a column and Up/Down across layers. Moves that would
//! leave the cube are skipped.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::{coord_to_idx, in_bounds, Coord, Grid};

/// Direction the blank travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    East,
    West,
    North,
    South,
    Up,
    Down,
}

impl Move {
    /// Every move in generation order.
    pub const ALL: [Move; 6] = [
        Move::East,
        Move::West,
        Move::North,
        Move::South,
        Move::Up,
        Move::Down,
    ];

    /// Displacement of the blank as `(layer, row, col)`.
    pub const fn offset(self) -> Coord {
        match self {
            Move::East => (0, 0, 1),
            Move::West => (0, 0, -1),
            Move::North => (0, -1, 0),
            Move::South => (0, 1, 0),
            Move::Up => (-1, 0, 0),
            Move::Down => (1, 0, 0),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Move::East => Move::West,
            Move::West => Move::East,
            Move::North => Move::South,
            Move::South => Move::North,
            Move::Up => Move::Down,
            Move::Down => Move::Up,
        }
    }

    /// Single-letter label used in reports.
    pub const fn letter(self) -> char {
        match self {
            Move::East => 'E',
            Move::West => 'W',
            Move::North => 'N',
            Move::South => 'S',
            Move::Up => 'U',
            Move::Down => 'D',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        Move::ALL
            .into_iter()
            .find(|mv| mv.letter() == letter.to_ascii_uppercase())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Moves the blank one step, or returns `None` at the edge of the cube.
#[inline]
pub fn apply(state: &Grid, movement: Move) -> Option<Grid> {
    let (layer, row, col) = state.blank_coord();
    let (d_layer, d_row, d_col) = movement.offset();
    let target = (layer + d_layer, row + d_row, col + d_col);

    if !in_bounds(target) {
        return None;
    }
    Some(state.with_blank_at(coord_to_idx(target.0, target.1, target.2)))
}

/// Enumerates every legal move from `state` with its successor.
///
/// Yields at most six entries, always in [`Move::ALL`] order.
pub fn legal_moves(state: &Grid) -> impl Iterator<Item = (Move, Grid)> {
    let state = *state;
    Move::ALL
        .into_iter()
        .filter_map(move |movement| apply(&state, movement).map(|next| (movement, next)))
}

/// Applies a sequence of moves, failing on the first one that leaves the cube.
pub fn replay(state: &Grid, moves: &[Move]) -> Option<Grid> {
    moves
        .iter()
        .try_fold(*state, |current, &movement| apply(&current, movement))
}

/// Random walk of `moves` steps from `start`, never undoing the previous step.
///
/// Returns the final grid and the moves taken.
pub fn scramble<R: Rng + ?Sized>(start: &Grid, moves: usize, rng: &mut R) -> (Grid, Vec<Move>) {
    let mut current = *start;
    let mut taken: Vec<Move> = Vec::with_capacity(moves);

    for _ in 0..moves {
        let previous = taken.last().copied();
        let candidates: Vec<(Move, Grid)> = legal_moves(&current)
            .filter(|&(movement, _)| Some(movement.opposite()) != previous)
            .collect();

        // every cell has at least three neighbours, so one always remains
        let Some(&(movement, next)) = candidates.choose(rng) else {
            break;
        };
        taken.push(movement);
        current = next;
    }

    (current, taken)
}
