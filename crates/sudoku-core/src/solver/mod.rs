//! Solver orchestration.
//!
//! Two phases run over one exclusively borrowed [`Board`]: a deterministic
//! unique-candidate propagation pass (`fill_unique_spots`), then a
//! depth-first backtracking search with forward-checking over whatever the
//! pass left open (`exhaustive_search`).

mod propagate;
mod search;
mod trace;

pub use trace::{LogTracer, NoopTracer, SearchTracer};

use crate::board::Board;
use crate::error::Error;

/// Two-phase Su Doku solver.
///
/// Holds no puzzle state of its own; the board is borrowed per call. A
/// [`SearchTracer`] can be injected to observe placements, rejections, and
/// backtracking.
pub struct Solver {
    tracer: Box<dyn SearchTracer>,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a solver with the no-op tracer.
    pub fn new() -> Self {
        Self {
            tracer: Box::new(NoopTracer),
        }
    }

    /// Create a solver that reports search events to `tracer`.
    pub fn with_tracer(tracer: Box<dyn SearchTracer>) -> Self {
        Self { tracer }
    }

    /// Solve the puzzle in place: propagation first, search for the rest.
    ///
    /// `Ok(true)` leaves the complete solution on the board. `Ok(false)`
    /// means the puzzle has no solution (or its givens conflict, which is
    /// not distinguished); the board is left as the propagation pass
    /// produced it.
    pub fn solve(&self, board: &mut Board) -> Result<bool, Error> {
        self.fill_unique_spots(board)?;
        self.exhaustive_search(board)
    }

    /// Non-mutating convenience: solve a copy of `board`, returning it on
    /// success.
    pub fn solved(&self, board: &Board) -> Result<Option<Board>, Error> {
        let mut working = board.clone();
        Ok(if self.solve(&mut working)? {
            Some(working)
        } else {
            None
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SIZE;

    const PUZZLE: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    const SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    fn assert_units_are_permutations(board: &Board) {
        for i in 0..SIZE {
            for digit in 1..=9 {
                assert_eq!(board.contains_in_row(digit, i), Ok(true));
                assert_eq!(board.contains_in_col(digit, i), Ok(true));
            }
        }
        for block_row in 0..3 {
            for block_col in 0..3 {
                for digit in 1..=9 {
                    assert_eq!(board.contains_in_block(digit, block_row, block_col), Ok(true));
                }
            }
        }
    }

    #[test]
    fn solves_the_classic_puzzle_to_its_unique_solution() {
        let mut board = Board::from_string(PUZZLE).unwrap();
        assert_eq!(Solver::new().solve(&mut board), Ok(true));
        assert_eq!(board.to_string_compact(), SOLUTION);
        assert_units_are_permutations(&board);
    }

    #[test]
    fn solves_a_puzzle_that_needs_the_search() {
        // Arto Inkala's puzzle; propagation alone cannot finish it.
        let mut board = Board::from_string(
            "800000000003600000070090200050007000000045700000100030001000068008500010090000400",
        )
        .unwrap();
        assert_eq!(Solver::new().solve(&mut board), Ok(true));
        assert!(board.is_solved());
        assert_units_are_permutations(&board);
    }

    #[test]
    fn solves_a_seventeen_given_puzzle() {
        let puzzle =
            "000000010400000000020000000000050407008000300001090000300400200050100000000806000";
        let mut board = Board::from_string(puzzle).unwrap();
        assert_eq!(board.given_count(), 17);

        assert_eq!(Solver::new().solve(&mut board), Ok(true));
        assert!(board.is_solved());

        // The givens survive into the solution.
        let original = Board::from_string(puzzle).unwrap();
        for row in 0..SIZE {
            for col in 0..SIZE {
                let given = original.get(row, col).unwrap();
                if given != 0 {
                    assert_eq!(board.get(row, col), Ok(given));
                }
            }
        }
    }

    #[test]
    fn reports_conflicting_givens_as_unsolvable() {
        let mut compact = PUZZLE.to_string();
        compact.replace_range(1..2, "5"); // row 0 now has two 5s
        let mut board = Board::from_string(&compact).unwrap();
        assert_eq!(Solver::new().exhaustive_search(&mut board), Ok(false));
    }

    #[test]
    fn solved_returns_a_copy_and_leaves_the_input_alone() {
        let board = Board::from_string(PUZZLE).unwrap();
        let solver = Solver::new();

        let solution = solver.solved(&board).unwrap().unwrap();
        assert_eq!(solution.to_string_compact(), SOLUTION);
        assert_eq!(board.to_string_compact(), PUZZLE);
    }
}
