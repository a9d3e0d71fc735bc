//! Sudoku solving engine.
//!
//! Solves standard 9x9 puzzles through exhaustive backtracking over the
//! row, column and box uniqueness constraints, recording every placement
//! and removal as a [`Move`] so the search can be replayed step by step.

mod error;
mod grid;
mod solver;

pub use error::{Error, Result};
pub use grid::{Cell, Grid, CELL_COUNT, SIZE};
pub use solver::{Move, Solution, Solver};
