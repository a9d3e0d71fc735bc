mod animate;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use sudoku_engine::{Grid, Solver};

/// Solve a 9x9 sudoku and animate the search in the terminal.
#[derive(Parser, Debug)]
#[command(name = "sudoku", version, about)]
struct Args {
    /// Solve the built-in example puzzle instead of reading rows from stdin
    #[arg(long)]
    example: bool,

    /// Milliseconds to wait between animated moves
    #[arg(long, default_value_t = 200)]
    speed: u64,
}

const EXAMPLE: [&str; 9] = [
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

fn main() -> Result<()> {
    let args = Args::parse();

    let rows = if args.example {
        EXAMPLE.iter().map(|r| r.to_string()).collect()
    } else {
        read_rows()?
    };

    let grid = Grid::parse(&rows).context("invalid puzzle")?;
    let solution = Solver::new().solve(&grid)?;

    let mut stdout = io::stdout();
    animate::animate(&mut stdout, args.speed, &solution)?;

    Ok(())
}

/// Prompt for and read nine puzzle rows from stdin.
fn read_rows() -> Result<Vec<String>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut rows = Vec::with_capacity(9);
    while rows.len() < 9 {
        print!("Please enter row {}:\t", rows.len() + 1);
        io::stdout().flush()?;

        let line = lines
            .next()
            .context("unexpected end of input")?
            .context("could not read row")?;
        rows.push(line.trim_end().to_string());
    }

    Ok(rows)
}
