//! Core search implementation
//!
//! The pile holds the tiles still to be placed, the selection module ranks
//! candidate cells and tiles, and the solver drives the recursive
//! placement-and-backtrack search over a board and pile it exclusively owns.

/// Ordered multiset of tiles awaiting placement
pub mod pile;
/// Position and tile selection heuristics
pub mod selection;
/// Recursive backtracking solver and its observer hooks
pub mod solver;

pub use pile::Pile;
pub use solver::{SolveObserver, Solver};
