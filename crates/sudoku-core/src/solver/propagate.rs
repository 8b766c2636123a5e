//! The deterministic unique-candidate propagation pass.

use super::Solver;
use crate::board::{Board, CandidateSet, Position, BLOCK, SIZE};
use crate::error::Error;

impl Solver {
    /// Repeatedly fill every cell that has exactly one legal candidate.
    ///
    /// Two deductions run per empty cell, in row-major passes until a full
    /// pass changes nothing:
    ///
    /// - naked single: the cell's row, column, and block leave only one
    ///   candidate, which is placed immediately;
    /// - block exclusion: a candidate is kept only if it already occurs in
    ///   both other rows and both other columns of the cell's 3×3 block
    ///   (whole-row and whole-column scans). A sole survivor is placed.
    ///
    /// More than one survivor of the exclusion step cannot happen on a
    /// well-formed puzzle and is reported as [`Error::Contradiction`]. The
    /// pass is weaker than full constraint propagation; whatever it leaves
    /// open falls through to the search.
    pub fn fill_unique_spots(&self, board: &mut Board) -> Result<(), Error> {
        let mut changed = true;
        while changed {
            changed = false;
            for row in 0..SIZE {
                for col in 0..SIZE {
                    if board.get_unchecked(row, col) != 0 {
                        continue;
                    }
                    let cands = board.candidates_at(row, col);
                    let placed = match cands.sole() {
                        Some(digit) => Some(digit),
                        None => block_exclusion(board, row, col, cands)?,
                    };
                    if let Some(digit) = placed {
                        board.set_unchecked(row, col, digit);
                        changed = true;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Keep only candidates already present in both other rows and both other
/// columns of the cell's block, which forces them into this cell.
///
/// Returns the sole survivor, `None` when the rule deduces nothing, and
/// [`Error::Contradiction`] when several candidates survive at once.
fn block_exclusion(
    board: &Board,
    row: usize,
    col: usize,
    cands: CandidateSet,
) -> Result<Option<u8>, Error> {
    let (row_a, row_b) = other_two(row);
    let (col_a, col_b) = other_two(col);

    let mut survivors = CandidateSet::empty();
    for digit in cands.iter() {
        let in_rows = board.scan_row(digit, row_a) && board.scan_row(digit, row_b);
        let in_cols = board.scan_col(digit, col_a) && board.scan_col(digit, col_b);
        if in_rows && in_cols {
            survivors.insert(digit);
        }
    }

    match survivors.len() {
        0 => Ok(None),
        1 => Ok(survivors.sole()),
        n => Err(Error::Contradiction {
            pos: Position::new(row, col),
            survivors: n,
        }),
    }
}

/// The other two row (or column) indices of the 3×3 band containing `index`.
fn other_two(index: usize) -> (usize, usize) {
    match index % BLOCK {
        0 => (index + 1, index + 2),
        1 => (index - 1, index + 1),
        _ => (index - 1, index - 2),
    }
}
