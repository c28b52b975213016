//! Recursive backtracking solver and its observer hooks
//!
//! The solver exclusively owns one board and one pile for the duration of a
//! search and mutates them in matched place/undo pairs around each recursive
//! call. Failure is ordinary control flow until it passes the outermost
//! frame, where it becomes [`SolverError::NoSolutionFound`] with the board
//! and pile fully unwound for inspection.

use crate::algorithm::pile::Pile;
use crate::algorithm::selection::{most_constrained_cells, scarcest_tile};
use crate::io::error::{Result, SolverError};
use crate::spatial::board::Board;
use crate::spatial::tile::Tile;

/// Notifications emitted by the solver as the search progresses
///
/// Observers are strictly downstream: they may render, log, or pace the
/// search, but nothing they do feeds back into it. All methods default to
/// no-ops, so a headless solve costs nothing.
pub trait SolveObserver {
    /// A tile was placed at (`row`, `col`) at the given recursion depth
    fn placement(&mut self, _row: usize, _col: usize, _tile: &Tile, _depth: usize) {}

    /// A placement was undone after the subtree below it failed
    fn backtrack(&mut self, _row: usize, _col: usize, _tile: &Tile, _depth: usize) {}

    /// Every tile has been placed
    fn success(&mut self) {}

    /// The search exhausted all branches with tiles still unplaced
    fn failure(&mut self, _remaining_tiles: usize) {}
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SolveObserver for NullObserver {}

/// Backtracking search over a board and pile it exclusively owns
///
/// Each frame collects every empty, adjacency-connected cell tied at the
/// minimum positive possibility count, then tries the minimal cells in
/// row-major order. At each cell the single best-ranked (scarcest) matching
/// tile is committed before recursing; when the subtree fails, the placement
/// is undone exactly and the search moves on to the next minimal cell. A
/// cell abandoned this way is reconsidered at shallower depths once the
/// surrounding placements change, but its other matching tiles are not tried
/// within the same frame, so the search is deliberately not exhaustive over
/// tile choices per cell.
#[derive(Debug, Clone)]
pub struct Solver {
    board: Board,
    pile: Pile,
}

impl Solver {
    /// Take ownership of the board and pile for the duration of the search
    pub const fn new(board: Board, pile: Pile) -> Self {
        Self { board, pile }
    }

    /// Current board state
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Current pile state
    pub const fn pile(&self) -> &Pile {
        &self.pile
    }

    /// Release the board and pile, e.g. after a failed search
    pub fn into_parts(self) -> (Board, Pile) {
        (self.board, self.pile)
    }

    /// Run the search to the first solution
    ///
    /// Terminates with success as soon as the pile is empty. Deterministic:
    /// a fixed pile order and board produce an identical placement sequence
    /// and outcome on every run.
    ///
    /// # Errors
    ///
    /// - [`SolverError::NoSolutionFound`] when every branch is exhausted;
    ///   the board and pile are left in their pre-search state.
    /// - [`SolverError::TileNotFound`] if a pile invariant is violated,
    ///   which indicates a bug rather than an unsolvable input.
    pub fn solve(&mut self, observer: &mut dyn SolveObserver) -> Result<()> {
        if self.solve_recursive(0, observer)? {
            observer.success();
            Ok(())
        } else {
            let remaining_tiles = self.pile.len();
            observer.failure(remaining_tiles);
            Err(SolverError::NoSolutionFound { remaining_tiles })
        }
    }

    /// One frame of the search; `Ok(false)` is a dead end, not an error
    fn solve_recursive(&mut self, depth: usize, observer: &mut dyn SolveObserver) -> Result<bool> {
        if self.pile.is_empty() {
            return Ok(true);
        }

        let candidates = most_constrained_cells(&self.board, &self.pile);
        if candidates.is_empty() {
            // Remaining tiles but no legal, connected position
            return Ok(false);
        }

        for cell in candidates {
            let pattern = self.board.edge_pattern(cell.row, cell.col);
            let matching = self.pile.filter(&pattern);

            let Some(tile) = scarcest_tile(&matching, &self.board, &self.pile) else {
                continue;
            };

            let slot = self.pile.remove(&tile)?;
            self.board.place(cell.row, cell.col, tile);
            observer.placement(cell.row, cell.col, &tile, depth);

            if self.solve_recursive(depth + 1, observer)? {
                return Ok(true);
            }

            // Undo in reverse order of the mutations above
            self.board.clear(cell.row, cell.col);
            self.pile.restore(slot, tile);
            observer.backtrack(cell.row, cell.col, &tile, depth);
        }

        Ok(false)
    }
}
