//! Step-by-step replay of a solve in the terminal.
//!
//! Walks the move log in order on a copy of the pre-solve board, drawing
//! one frame per move with a progress bar underneath. Frames overwrite
//! each other by cursor repositioning, not by re-clearing, to avoid
//! flicker.

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::Print,
    terminal::{self, Clear, ClearType},
};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use sudoku_engine::{Grid, Solution};

/// The rendered board is 13 lines of 19 characters.
const BOARD_WIDTH: u16 = 19;
const BOARD_HEIGHT: u16 = 13;
/// Inner width of the progress bar, matching the board width.
const BAR_WIDTH: usize = 11;

pub fn animate(stdout: &mut io::Stdout, speed_ms: u64, solution: &Solution) -> Result<()> {
    let (term_width, term_height) = terminal::size().unwrap_or((80, 24));
    let pad_left = (term_width.saturating_sub(BOARD_WIDTH) / 2) as usize;
    let pad_top = term_height.saturating_sub(BOARD_HEIGHT + 2) / 2;
    let bar_row = pad_top + BOARD_HEIGHT + 1;

    let mut board = solution.original.clone();
    let total = solution.moves.len();

    execute!(stdout, Clear(ClearType::All), Hide)?;
    draw_board(stdout, &board, pad_left, pad_top)?;
    draw_progress(stdout, pad_left, bar_row, 0, total)?;
    stdout.flush()?;

    let result = (|| -> Result<()> {
        for (step, mv) in solution.moves.iter().enumerate() {
            thread::sleep(Duration::from_millis(speed_ms));
            mv.apply(&mut board)?;
            draw_board(stdout, &board, pad_left, pad_top)?;
            draw_progress(stdout, pad_left, bar_row, step + 1, total)?;
            stdout.flush()?;
        }
        Ok(())
    })();

    // Restore the cursor even if a frame failed.
    execute!(stdout, Show, MoveTo(0, bar_row))?;
    writeln!(stdout)?;

    result
}

fn draw_board(stdout: &mut io::Stdout, board: &Grid, pad_left: usize, pad_top: u16) -> Result<()> {
    execute!(stdout, MoveTo(0, pad_top))?;
    for line in board.render(pad_left).lines() {
        execute!(stdout, Print(line), Print("\n"))?;
    }
    Ok(())
}

fn draw_progress(
    stdout: &mut io::Stdout,
    pad_left: usize,
    row: u16,
    done: usize,
    total: usize,
) -> Result<()> {
    let filled = if total == 0 {
        BAR_WIDTH
    } else {
        done * BAR_WIDTH / total
    };

    let bar = format!(
        "{}[{}{}] {:>3}/{}",
        " ".repeat(pad_left),
        "=".repeat(filled),
        " ".repeat(BAR_WIDTH - filled),
        done,
        total
    );
    execute!(stdout, MoveTo(0, row), Clear(ClearType::CurrentLine), Print(bar))?;
    Ok(())
}
