//! Core Su Doku solving engine.
//!
//! [`Board`] owns the 9×9 grid of digits (0 marks an open cell) and answers
//! the constraint queries derived from it; [`Solver`] fills the board in two
//! phases: a deterministic unique-candidate propagation pass, then a
//! depth-first backtracking search with forward-checking and the
//! minimum-remaining-values cell choice.
//!
//! ```
//! use sudoku_core::{Board, Solver};
//!
//! let mut board = Board::from_string(
//!     "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
//! )
//! .expect("well-formed puzzle");
//!
//! let solver = Solver::new();
//! assert_eq!(solver.solve(&mut board), Ok(true));
//! assert!(board.is_solved());
//! ```

pub mod board;
pub mod error;
pub mod solver;

pub use board::{Board, CandidateSet, Position};
pub use error::Error;
pub use solver::{LogTracer, NoopTracer, SearchTracer, Solver};
