use thiserror::Error;

/// Errors reported by the board and the solver.
///
/// A candidate digit being rejected by the row/column/box constraints is
/// not an error; `Grid::set` reports that as `Ok(false)` and the solver
/// treats it as its normal backtracking signal.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// More than nine rows of puzzle input.
    #[error("too many rows; want 9 got {0}")]
    TooManyRows(usize),
    /// A row of puzzle input longer than nine characters.
    #[error("row {row} too long; want 9, length {len}")]
    RowTooLong { row: usize, len: usize },
    /// A character in the puzzle input that is not a digit.
    #[error("invalid character {ch:?} in row {row}")]
    InvalidCharacter { ch: char, row: usize },
    /// A coordinate outside the 9x9 board.
    #[error("invalid coordinate: {x},{y}")]
    OutOfBounds { x: usize, y: usize },
    /// A flat cell index outside 0..81.
    #[error("invalid cell {0}; larger than grid size")]
    IndexOutOfBounds(usize),
    /// A digit outside 1..=9.
    #[error("invalid value: {0}; want 1-9")]
    InvalidValue(u8),
    /// An attempt to clear a cell given by the original puzzle.
    #[error("cell at {x},{y} is locked")]
    Locked { x: usize, y: usize },
    /// A puzzle digit that conflicts with its row, column or box.
    #[error("could not set {value} at {x},{y}")]
    Placement { x: usize, y: usize, value: u8 },
    /// The puzzle admits no solution.
    #[error("puzzle has no solution")]
    Unsolvable,
}

pub type Result<T> = core::result::Result<T, Error>;
