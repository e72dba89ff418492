//! A row-sweep enumeration engine for Slitherlink puzzles.
//!
//! Solutions are counted (or enumerated) by sweeping the dot lattice one row
//! at a time, tracking the open loop connectivity in a [`frontier::Frontier`]
//! and pruning against per-cell edge-count clues as each row completes. See
//! [`search::Solver`] for the entry point.

pub mod board;
pub mod error;
pub mod frontier;
pub mod pattern;
pub mod propagate;
pub mod render;
pub mod search;

pub use board::Board;
pub use error::BoardError;
pub use search::Solver;

#[cfg(feature = "parallel")]
pub use search::count_parallel;
