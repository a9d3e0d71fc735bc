//! The 9x9 board.
//!
//! Cells are addressed either by an `(x, y)` coordinate pair or by a flat
//! index `n` in `0..81`, where `x = n / 9` and `y = n % 9`. `x` is the
//! puzzle row as entered; `y` is the character position within that row.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Side length of the board.
pub const SIZE: usize = 9;
/// Number of cells on the board.
pub const CELL_COUNT: usize = SIZE * SIZE;

const RULE: &str = "|-----|-----|-----|";

/// A single cell on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// The digit held by the cell, `None` when empty. Stored digits are
    /// always in 1..=9.
    pub value: Option<u8>,
    /// Whether the cell is shown when rendering. Set whenever a value is
    /// placed; retained for rendering variations.
    pub visible: bool,
    /// Whether the cell was given by the original puzzle. Locked cells are
    /// never cleared by the solver.
    pub locked: bool,
}

impl Cell {
    /// Whether the cell holds a digit.
    pub fn is_filled(&self) -> bool {
        self.value.is_some()
    }
}

/// A 9x9 sudoku board.
///
/// Invariant: no row, column or 3x3 box contains a duplicate digit. All
/// mutation goes through [`Grid::set`] and [`Grid::unset`], which uphold it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Cell; SIZE]; SIZE],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create an empty board.
    pub fn new() -> Self {
        Grid {
            cells: [[Cell::default(); SIZE]; SIZE],
        }
    }

    /// Parse a board from rows of digit characters, `'0'` meaning empty.
    ///
    /// At most nine rows of at most nine characters each; every parsed
    /// digit is placed locked. Fails on the first digit that conflicts
    /// with an earlier one, so a partially built grid is never returned.
    /// Fewer than nine rows yields a partially filled board.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        if rows.len() > SIZE {
            return Err(Error::TooManyRows(rows.len()));
        }

        let mut grid = Grid::new();
        for (x, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let len = row.chars().count();
            if len > SIZE {
                return Err(Error::RowTooLong { row: x, len });
            }
            for (y, ch) in row.chars().enumerate() {
                let value = ch
                    .to_digit(10)
                    .ok_or(Error::InvalidCharacter { ch, row: x })? as u8;
                if value == 0 {
                    continue;
                }
                match grid.set(x, y, value, true) {
                    Ok(true) => {}
                    Ok(false) | Err(_) => {
                        return Err(Error::Placement { x, y, value });
                    }
                }
            }
        }

        Ok(grid)
    }

    /// Place `value` at `(x, y)`, locking the cell if `lock` is set.
    ///
    /// Returns `Ok(false)` when the placement would duplicate `value` in
    /// the cell's row, column or box. That is the cheap candidate test the
    /// solver relies on, not a failure.
    pub fn set(&mut self, x: usize, y: usize, value: u8, lock: bool) -> Result<bool> {
        if value == 0 || value > 9 {
            return Err(Error::InvalidValue(value));
        }
        if x >= SIZE || y >= SIZE {
            return Err(Error::OutOfBounds { x, y });
        }
        if !self.is_valid(x, y, value) {
            return Ok(false);
        }

        self.cells[y][x] = Cell {
            value: Some(value),
            visible: true,
            locked: lock,
        };
        Ok(true)
    }

    /// Clear the cell at `(x, y)`. Locked cells can never be cleared.
    pub fn unset(&mut self, x: usize, y: usize) -> Result<()> {
        if x >= SIZE || y >= SIZE {
            return Err(Error::OutOfBounds { x, y });
        }
        if self.cells[y][x].locked {
            return Err(Error::Locked { x, y });
        }

        self.cells[y][x] = Cell::default();
        Ok(())
    }

    /// Whether placing `value` at `(x, y)` keeps the row, column and box
    /// free of duplicates. Pure check, no side effects.
    pub fn is_valid(&self, x: usize, y: usize, value: u8) -> bool {
        let value = Some(value);
        for i in 0..SIZE {
            if self.cells[y][i].value == value {
                return false;
            }
            if self.cells[i][x].value == value {
                return false;
            }
        }

        let box_y = y / 3 * 3;
        let box_x = x / 3 * 3;
        for i in box_y..box_y + 3 {
            for j in box_x..box_x + 3 {
                if self.cells[i][j].value == value {
                    return false;
                }
            }
        }

        true
    }

    /// Convert a flat index into its `(x, y)` coordinate.
    pub fn index_to_coord(n: usize) -> (usize, usize) {
        (n / SIZE, n % SIZE)
    }

    /// Get a copy of the cell at flat index `n`.
    pub fn get_by_index(&self, n: usize) -> Result<Cell> {
        if n >= CELL_COUNT {
            return Err(Error::IndexOutOfBounds(n));
        }
        let (x, y) = Self::index_to_coord(n);
        Ok(self.cells[y][x])
    }

    /// [`Grid::set`] by flat index. Placements through this path are never
    /// locked; it is only used while solving and replaying.
    pub fn set_by_index(&mut self, n: usize, value: u8) -> Result<bool> {
        if n >= CELL_COUNT {
            return Err(Error::IndexOutOfBounds(n));
        }
        let (x, y) = Self::index_to_coord(n);
        self.set(x, y, value, false)
    }

    /// [`Grid::unset`] by flat index.
    pub fn unset_by_index(&mut self, n: usize) -> Result<()> {
        if n >= CELL_COUNT {
            return Err(Error::IndexOutOfBounds(n));
        }
        let (x, y) = Self::index_to_coord(n);
        self.unset(x, y)
    }

    /// Whether every cell holds a digit.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().flatten().all(Cell::is_filled)
    }

    /// Render the board as fixed-width text, each line indented by
    /// `padding` spaces. Empty cells render as `0`.
    ///
    /// ```text
    /// |-----|-----|-----|
    /// |0 0 0|0 8 0|0 7 0|
    /// ...
    /// ```
    pub fn render(&self, padding: usize) -> String {
        let pad = " ".repeat(padding);

        let mut out = String::new();
        out.push_str(&pad);
        out.push_str(RULE);
        out.push('\n');
        for x in 0..SIZE {
            out.push_str(&pad);
            out.push('|');
            for y in 0..SIZE {
                let digit = self.cells[y][x].value.unwrap_or(0);
                out.push(char::from(b'0' + digit));
                out.push(if y % 3 == 2 { '|' } else { ' ' });
            }
            out.push('\n');
            if x % 3 == 2 {
                out.push_str(&pad);
                out.push_str(RULE);
                out.push('\n');
            }
        }

        out.trim_end_matches('\n').to_string()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build the expected render of `rows` in the documented layout.
    fn board_text(rows: &[&str]) -> String {
        let mut out = String::from("|-----|-----|-----|\n");
        for (i, row) in rows.iter().enumerate() {
            out.push('|');
            for (j, ch) in row.chars().enumerate() {
                out.push(ch);
                out.push(if j % 3 == 2 { '|' } else { ' ' });
            }
            out.push('\n');
            if i % 3 == 2 {
                out.push_str("|-----|-----|-----|\n");
            }
        }
        out.trim_end_matches('\n').to_string()
    }

    const PUZZLE: [&str; 9] = [
        "000080070",
        "058030100",
        "000000000",
        "026000090",
        "400000006",
        "700029300",
        "007000900",
        "100203000",
        "060000054",
    ];

    #[test]
    fn test_render_empty_board() {
        let expected = "\
|-----|-----|-----|
|0 0 0|0 0 0|0 0 0|
|0 0 0|0 0 0|0 0 0|
|0 0 0|0 0 0|0 0 0|
|-----|-----|-----|
|0 0 0|0 0 0|0 0 0|
|0 0 0|0 0 0|0 0 0|
|0 0 0|0 0 0|0 0 0|
|-----|-----|-----|
|0 0 0|0 0 0|0 0 0|
|0 0 0|0 0 0|0 0 0|
|0 0 0|0 0 0|0 0 0|
|-----|-----|-----|";
        assert_eq!(Grid::new().render(0), expected);
    }

    #[test]
    fn test_parse_then_render_matches_input() {
        let grid = Grid::parse(&PUZZLE).unwrap();
        assert_eq!(grid.render(0), board_text(&PUZZLE));
    }

    #[test]
    fn test_render_padding() {
        let grid = Grid::parse(&PUZZLE).unwrap();
        for line in grid.render(3).lines() {
            assert!(line.starts_with("   |"));
        }
    }

    #[test]
    fn test_display_matches_render() {
        let grid = Grid::parse(&PUZZLE).unwrap();
        assert_eq!(grid.to_string(), grid.render(0));
    }

    #[test]
    fn test_parse_short_input() {
        let grid = Grid::parse(&["123"]).unwrap();
        assert_eq!(grid.get_by_index(0).unwrap().value, Some(1));
        assert_eq!(grid.get_by_index(1).unwrap().value, Some(2));
        assert_eq!(grid.get_by_index(2).unwrap().value, Some(3));
        assert_eq!(grid.get_by_index(3).unwrap().value, None);
    }

    #[test]
    fn test_parse_locks_givens() {
        let grid = Grid::parse(&PUZZLE).unwrap();
        for n in 0..CELL_COUNT {
            let cell = grid.get_by_index(n).unwrap();
            assert_eq!(cell.locked, cell.value.is_some());
        }
    }

    #[test]
    fn test_parse_too_many_rows() {
        let rows = ["000000000"; 10];
        assert_eq!(Grid::parse(&rows), Err(Error::TooManyRows(10)));
    }

    #[test]
    fn test_parse_row_too_long() {
        assert_eq!(
            Grid::parse(&["0000000000"]),
            Err(Error::RowTooLong { row: 0, len: 10 })
        );
    }

    #[test]
    fn test_parse_non_digit() {
        assert_eq!(
            Grid::parse(&["12x"]),
            Err(Error::InvalidCharacter { ch: 'x', row: 0 })
        );
    }

    #[test]
    fn test_parse_conflicting_digits() {
        // Two 5s in the same row.
        assert_eq!(
            Grid::parse(&["505"]),
            Err(Error::Placement { x: 0, y: 2, value: 5 })
        );
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut grid = Grid::new();
        assert_eq!(grid.set(0, 0, 0, false), Err(Error::InvalidValue(0)));
        assert_eq!(grid.set(0, 0, 10, false), Err(Error::InvalidValue(10)));
        assert_eq!(
            grid.set(9, 0, 1, false),
            Err(Error::OutOfBounds { x: 9, y: 0 })
        );
    }

    #[test]
    fn test_set_reports_conflict_as_false() {
        let mut grid = Grid::new();
        assert_eq!(grid.set(0, 0, 7, false), Ok(true));
        // Same row, same column, same box.
        assert_eq!(grid.set(0, 5, 7, false), Ok(false));
        assert_eq!(grid.set(5, 0, 7, false), Ok(false));
        assert_eq!(grid.set(1, 1, 7, false), Ok(false));
        // A different digit next to it is fine.
        assert_eq!(grid.set(0, 1, 3, false), Ok(true));
    }

    #[test]
    fn test_is_valid_empty_board() {
        let grid = Grid::new();
        for x in 0..SIZE {
            for y in 0..SIZE {
                for value in 1..=9 {
                    assert!(grid.is_valid(x, y, value));
                }
            }
        }
    }

    #[test]
    fn test_is_valid_sees_row_col_box() {
        let mut grid = Grid::new();
        grid.set(4, 4, 9, false).unwrap();
        assert!(!grid.is_valid(4, 8, 9)); // row 4
        assert!(!grid.is_valid(8, 4, 9)); // column 4
        assert!(!grid.is_valid(3, 3, 9)); // centre box
        assert!(grid.is_valid(0, 0, 9));
        assert!(grid.is_valid(3, 3, 8));
    }

    #[test]
    fn test_unset_locked_cell() {
        let mut grid = Grid::new();
        grid.set(2, 3, 5, true).unwrap();
        assert_eq!(grid.unset(2, 3), Err(Error::Locked { x: 2, y: 3 }));
        assert_eq!(grid.cells[3][2].value, Some(5));
    }

    #[test]
    fn test_unset_clears_unlocked_cell() {
        let mut grid = Grid::new();
        grid.set(2, 3, 5, false).unwrap();
        grid.unset(2, 3).unwrap();
        assert_eq!(grid.cells[3][2], Cell::default());
    }

    #[test]
    fn test_index_to_coord() {
        assert_eq!(Grid::index_to_coord(0), (0, 0));
        assert_eq!(Grid::index_to_coord(9), (1, 0));
        assert_eq!(Grid::index_to_coord(10), (1, 1));
        assert_eq!(Grid::index_to_coord(80), (8, 8));
    }

    #[test]
    fn test_get_by_index_out_of_range() {
        let grid = Grid::new();
        assert_eq!(grid.get_by_index(81), Err(Error::IndexOutOfBounds(81)));
    }

    #[test]
    fn test_index_forms_match_coordinate_forms() {
        let mut grid = Grid::new();
        assert_eq!(grid.set_by_index(10, 4), Ok(true));
        assert_eq!(grid.get_by_index(10).unwrap().value, Some(4));
        assert!(!grid.get_by_index(10).unwrap().locked);
        assert_eq!(grid.cells[1][1].value, Some(4));
        grid.unset_by_index(10).unwrap();
        assert_eq!(grid.get_by_index(10).unwrap().value, None);
    }

    #[test]
    fn test_is_complete() {
        let mut grid = Grid::new();
        assert!(!grid.is_complete());
        let solved = [
            "312586479",
            "958437162",
            "674912538",
            "526374891",
            "439158726",
            "781629345",
            "247865913",
            "195243687",
            "863791254",
        ];
        grid = Grid::parse(&solved).unwrap();
        assert!(grid.is_complete());
    }
}
