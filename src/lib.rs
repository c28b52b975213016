//! Edge-matching tile placement via constraint-guided backtracking
//!
//! The solver places a finite pile of four-edge-typed square tiles onto a
//! grid so that every shared edge between adjacent tiles matches. Positions
//! are chosen most-constrained-first and tiles scarcest-first, with exact
//! undo of board and pile mutations on every backtrack.

#![forbid(unsafe_code)]

/// Core search implementation including the pile, selection heuristics, and backtracking solver
pub mod algorithm;
/// Input/output operations, CLI driver, and error handling
pub mod io;
/// Tile and board data structures
pub mod spatial;

pub use io::error::{Result, SolverError};
