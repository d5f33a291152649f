//! Typed errors for malformed puzzles and unreadable input files.
//!
//! An unreachable goal is not an error: the search driver reports it as
//! [`crate::solver::SearchOutcome::Unreachable`].

use thiserror::Error;

/// A single grid violates the one-blank, unique-label invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("expected exactly one blank cell, found {found}")]
    BlankCount { found: usize },

    #[error("label {label} appears more than once")]
    DuplicateLabel { label: u8 },
}

/// The initial/goal pair cannot be searched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("initial configuration: {0}")]
    Initial(#[source] GridError),

    #[error("goal configuration: {0}")]
    Goal(#[source] GridError),

    #[error(
        "initial and goal configurations use different labels \
         (only in initial: {only_initial:?}, only in goal: {only_goal:?})"
    )]
    LabelMismatch {
        only_initial: Vec<u8>,
        only_goal: Vec<u8>,
    },
}

/// Failure while reading the textual puzzle layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: invalid cell value {token:?}")]
    InvalidCell { line: usize, token: String },

    #[error("line {line}: expected {expected} cells, found {found}")]
    RowWidth {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("layer starting on line {line}: expected {expected} rows, found {found}")]
    LayerHeight {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("expected {expected} layers, found {found}")]
    LayerCount { expected: usize, found: usize },

    #[error(transparent)]
    Invalid(#[from] PuzzleError),
}

/// Top-level error for the command-line front end.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    Puzzle(#[from] PuzzleError),

    #[error("goal is not reachable from the initial configuration (parity mismatch)")]
    Unsolvable,

    #[error("search exhausted after generating {nodes_generated} nodes without reaching the goal")]
    Unreachable { nodes_generated: u64 },
}
