//! Observability seam for the search.
//!
//! The search reports placements, rejections, pruning, and backtracking
//! through a [`SearchTracer`]. The default is a no-op; [`LogTracer`] routes
//! the events through the `log` facade so any backend can capture them.
//! Tracing never affects the solving contract.

use crate::board::Position;

/// Receives search events at well-defined points.
///
/// Every method has a no-op default, so implementations override only the
/// events they care about. Methods take `&self`; tracers that accumulate
/// state use interior mutability.
pub trait SearchTracer {
    /// The top-level search is starting over `_open_count` open cells.
    fn search_started(&self, _open_count: usize) {}

    /// A frame at `_depth` picked `_pos` (with `_candidates` candidates) to
    /// branch on.
    fn frame_entered(&self, _depth: usize, _pos: Position, _candidates: usize) {}

    /// `_value` was tentatively placed at `_pos`, the `_index`th of `_total`
    /// candidates for this frame.
    fn value_tried(&self, _depth: usize, _pos: Position, _value: u8, _index: usize, _total: usize) {}

    /// The tentative `_value` broke `_pos`'s row, column, or block and was
    /// rejected.
    fn value_rejected(&self, _depth: usize, _pos: Position, _value: u8) {}

    /// Forward-checking removed `_value` from the candidates of `_pos`,
    /// leaving `_remaining`.
    fn candidate_pruned(&self, _pos: Position, _value: u8, _remaining: usize) {}

    /// Forward-checking emptied the candidates of `_pos`; the branch is
    /// abandoned before recursing.
    fn dead_end(&self, _pos: Position) {}

    /// The frame at `_depth` exhausted its candidates and reset `_pos`.
    fn backtracked(&self, _depth: usize, _pos: Position) {}
}

/// The default tracer: ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTracer;

impl SearchTracer for NoopTracer {}

/// Emits a human-readable trace line per event through [`log::trace!`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTracer;

impl SearchTracer for LogTracer {
    fn search_started(&self, open_count: usize) {
        log::trace!("starting search over {} open cells", open_count);
    }

    fn frame_entered(&self, depth: usize, pos: Position, candidates: usize) {
        log::trace!(
            "step {}: choosing position {} ({} candidates)",
            depth,
            pos,
            candidates
        );
    }

    fn value_tried(&self, depth: usize, pos: Position, value: u8, index: usize, total: usize) {
        log::trace!(
            "+ step {}, position {}: testing value {}/{} = {}",
            depth,
            pos,
            index,
            total,
            value
        );
    }

    fn value_rejected(&self, depth: usize, pos: Position, value: u8) {
        log::trace!(
            "  step {}, position {}: value {} breaks a row, column, or block",
            depth,
            pos,
            value
        );
    }

    fn candidate_pruned(&self, pos: Position, value: u8, remaining: usize) {
        log::trace!("    removed {} from {} ({} left)", value, pos, remaining);
    }

    fn dead_end(&self, pos: Position) {
        log::trace!("    position {} has no candidates left, testing next value", pos);
    }

    fn backtracked(&self, depth: usize, pos: Position) {
        log::trace!("- step {}: going back from position {}", depth, pos);
    }
}
