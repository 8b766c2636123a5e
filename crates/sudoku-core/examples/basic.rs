//! Basic example of using the solving engine.

use sudoku_core::{Board, Solver};

fn main() {
    // Parse a puzzle from the compact form
    let puzzle_string =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    let mut board = Board::from_string(puzzle_string).expect("well-formed puzzle");

    println!("Puzzle:");
    println!("{}", board);

    // Show some stats
    println!("Given cells: {}", board.given_count());
    println!("Empty cells: {}", board.empty_count());
    println!();

    // Solve it
    let solver = Solver::new();
    match solver.solve(&mut board) {
        Ok(true) => {
            println!("Solution:");
            println!("{}", board);
        }
        Ok(false) => println!("No solution found"),
        Err(err) => println!("Engine error: {}", err),
    }
}
