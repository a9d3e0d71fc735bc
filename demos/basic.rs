//! Basic example of using the solving engine

use sudoku_engine::{Grid, Solver};

fn main() {
    let rows = [
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

    let grid = Grid::parse(&rows).expect("example puzzle is well formed");
    println!("Puzzle:");
    println!("{}\n", grid);

    match Solver::new().solve(&grid) {
        Ok(solution) => {
            println!("Solved in {} moves:", solution.moves.len());
            println!("{}", solution.solved);
        }
        Err(e) => println!("No solution: {}", e),
    }
}
