//! Exhaustive backtracking solver.
//!
//! The search walks the flat cell indices `0..81` in order, trying digits
//! ascending at each empty cell and undoing earlier placements when a cell
//! admits no digit. Every placement and removal is recorded as a [`Move`]
//! so the whole search can be replayed step by step.

use crate::error::{Error, Result};
use crate::grid::{Grid, CELL_COUNT};
use serde::{Deserialize, Serialize};

/// One step taken during solving: a placement (`value` is `Some`) or a
/// backtracking removal (`value` is `None`) at a flat cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub cell: usize,
    pub value: Option<u8>,
}

impl Move {
    /// A placement of `value` at `cell`.
    pub fn place(cell: usize, value: u8) -> Self {
        Move {
            cell,
            value: Some(value),
        }
    }

    /// A backtracking removal at `cell`.
    pub fn unset(cell: usize) -> Self {
        Move { cell, value: None }
    }

    /// Replay this move against a board. Placements are applied unlocked,
    /// the same way the solver made them.
    pub fn apply(&self, grid: &mut Grid) -> Result<()> {
        match self.value {
            Some(value) => {
                grid.set_by_index(self.cell, value)?;
            }
            None => {
                grid.unset_by_index(self.cell)?;
            }
        }
        Ok(())
    }
}

/// The outcome of a successful solve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    /// The board exactly as it was before solving.
    pub original: Grid,
    /// The fully solved board.
    pub solved: Grid,
    /// Every placement and removal made during the search, in order.
    /// Replaying them against `original` reproduces each intermediate
    /// state and ends at `solved`.
    pub moves: Vec<Move>,
}

/// Unit struct solver; all state is per-call.
#[derive(Debug, Default)]
pub struct Solver;

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Solver
    }

    /// Solve the puzzle by backtracking.
    ///
    /// The caller's grid is not touched; the search runs on a clone and a
    /// second clone is returned untouched as [`Solution::original`].
    /// Fails with [`Error::Unsolvable`] when backtracking runs out of
    /// cells to revisit.
    pub fn solve(&self, grid: &Grid) -> Result<Solution> {
        let original = grid.clone();
        let mut board = grid.clone();
        let mut moves = Vec::new();

        let mut sq = 0;
        // First candidate to try at the current cell: 1 whenever the
        // cursor moves forward, the undone digit + 1 after backtracking.
        let mut resume = 1u8;

        while sq < CELL_COUNT {
            if board.get_by_index(sq)?.is_filled() {
                sq += 1;
                resume = 1;
                continue;
            }

            let mut placed = false;
            for value in resume..=9 {
                if board.set_by_index(sq, value)? {
                    moves.push(Move::place(sq, value));
                    placed = true;
                    break;
                }
            }
            if placed {
                sq += 1;
                resume = 1;
                continue;
            }

            // No digit fits here. Walk back over locked cells to the
            // nearest solver-placed digit, undo it, and retry that cell
            // starting past the digit it held.
            loop {
                if sq == 0 {
                    return Err(Error::Unsolvable);
                }
                sq -= 1;

                let cell = board.get_by_index(sq)?;
                if cell.locked {
                    continue;
                }
                let Some(undone) = cell.value else {
                    continue;
                };
                board.unset_by_index(sq)?;
                moves.push(Move::unset(sq));
                resume = undone + 1;
                break;
            }
        }

        Ok(Solution {
            original,
            solved: board,
            moves,
        })
    }
}
