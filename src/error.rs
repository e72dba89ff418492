//! # Error Types
//!
//! Errors surfaced at the boundary of the library: malformed puzzle input.
//! Everything inside the search core itself either succeeds or silently
//! prunes a branch (see [`crate::propagate`]) — it never returns a `Result`.

use thiserror::Error;

/// Failure modes when turning raw puzzle text into a [`crate::board::Board`].
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("input is empty")]
    Empty,

    #[error("row {row} has length {found}, expected {expected} (rows must all share one width)")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}, column {col}: invalid character {ch:?} (expected '0'-'3' or '.')")]
    InvalidChar { row: usize, col: usize, ch: char },

    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
