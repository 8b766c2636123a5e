//! Depth-first backtracking over the remaining open cells.

use std::collections::BTreeMap;

use super::Solver;
use crate::board::{Board, CandidateSet, Position};
use crate::error::Error;

/// Candidate mapping for the cells a search frame still has to fill.
///
/// A `BTreeMap` keyed by [`Position`] iterates row-major, which fixes the
/// tie-break order of the cell choice below.
type OpenCells = BTreeMap<Position, CandidateSet>;

impl Solver {
    /// Search the remaining solution space, mutating `board` in place.
    ///
    /// The open-cell candidate mapping is computed from the board exactly
    /// once, here; every recursion level derives its own reduced copy from
    /// its parent's. Returns `Ok(true)` once the board holds a complete valid
    /// solution (the winning assignment is left on the board) and `Ok(false)`
    /// when the space is exhausted. An unsolvable puzzle and a malformed one
    /// (duplicate givens) are deliberately not distinguished: both exhaust
    /// the space, and the board is restored to its entry state.
    pub fn exhaustive_search(&self, board: &mut Board) -> Result<bool, Error> {
        let mut open = OpenCells::new();
        for pos in board.empty_positions() {
            open.insert(pos, board.candidates_at(pos.row, pos.col));
        }

        self.tracer.search_started(open.len());

        if open.is_empty() {
            // Propagation already finished the puzzle; nothing to search.
            return Ok(!board.has_open_cells());
        }
        Ok(self.search_frame(board, &open, 1))
    }

    /// One search frame: branch on the most constrained open cell.
    fn search_frame(&self, board: &mut Board, open: &OpenCells, depth: usize) -> bool {
        // Minimum remaining values: fewest candidates first, ties broken by
        // the mapping's row-major order.
        let (&pos, &cands) = open
            .iter()
            .min_by_key(|(_, set)| set.len())
            .expect("search frame entered with no open cells");

        self.tracer.frame_entered(depth, pos, cands.len());

        let mut rest = open.clone();
        rest.remove(&pos);

        let total = cands.len();
        for (index, value) in cands.iter().enumerate() {
            board.set_unchecked(pos.row, pos.col, value);
            self.tracer.value_tried(depth, pos, value, index + 1, total);

            // A rejected value needs no explicit undo: the next iteration
            // overwrites it, and the frame resets the cell on exhaustion.
            if !board.placement_is_valid(pos) {
                self.tracer.value_rejected(depth, pos, value);
                continue;
            }

            if rest.is_empty() {
                return true;
            }

            if let Some(reduced) = self.forward_check(&rest, pos, value) {
                if self.search_frame(board, &reduced, depth + 1) {
                    return true;
                }
            }
        }

        self.tracer.backtracked(depth, pos);
        board.set_unchecked(pos.row, pos.col, 0);
        false
    }

    /// Copy-on-branch pruning: derive a child mapping with `value` removed
    /// from every open cell sharing `pos`'s row, column, or block.
    ///
    /// `None` marks a dead end (some cell lost its last candidate), in which
    /// case the branch is abandoned without recursing.
    fn forward_check(&self, open: &OpenCells, pos: Position, value: u8) -> Option<OpenCells> {
        let mut reduced = open.clone();
        for (&other, cands) in reduced.iter_mut() {
            if !pos.sees(other) || !cands.contains(value) {
                continue;
            }
            cands.remove(value);
            self.tracer.candidate_pruned(other, value, cands.len());
            if cands.is_empty() {
                self.tracer.dead_end(other);
                return None;
            }
        }
        Some(reduced)
    }
}
