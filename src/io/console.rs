//! Console board snapshots with optional pacing
//!
//! Mirrors the solver's placements onto a private copy of the board and
//! prints a snapshot after every step. The reporter only consumes events;
//! nothing here feeds back into the search. With a zero delay and quiet
//! mode the whole thing is a no-op, which is what headless runs use.

use crate::algorithm::solver::SolveObserver;
use crate::spatial::board::Board;
use crate::spatial::tile::Tile;
use std::time::Duration;

/// Observer that prints the board after each placement or backtrack
pub struct ConsoleReporter {
    board: Board,
    delay: Duration,
    quiet: bool,
}

impl ConsoleReporter {
    /// Create a reporter seeded with the board's pre-search state
    ///
    /// `delay` paces the output between steps so a human can follow the
    /// search; `Duration::ZERO` disables pacing.
    pub const fn new(board: Board, delay: Duration, quiet: bool) -> Self {
        Self {
            board,
            delay,
            quiet,
        }
    }

    // Allow print for user-facing board snapshots
    #[allow(clippy::print_stdout)]
    fn snapshot(&self, heading: &str) {
        if self.quiet {
            return;
        }
        println!("{heading}");
        println!("{}", self.board);
        println!();
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }
}

impl SolveObserver for ConsoleReporter {
    fn placement(&mut self, row: usize, col: usize, tile: &Tile, depth: usize) {
        self.board.place(row, col, *tile);
        self.snapshot(&format!("Placed {tile} at ({row}, {col}), depth {depth}"));
    }

    fn backtrack(&mut self, row: usize, col: usize, tile: &Tile, depth: usize) {
        self.board.clear(row, col);
        self.snapshot(&format!(
            "Backtracked {tile} from ({row}, {col}), depth {depth}"
        ));
    }

    // Allow print for user-facing outcome messages
    #[allow(clippy::print_stdout)]
    fn success(&mut self) {
        if !self.quiet {
            println!("Success! All tiles have been placed.");
        }
    }

    // Allow print for user-facing outcome messages
    #[allow(clippy::print_stdout)]
    fn failure(&mut self, remaining_tiles: usize) {
        if !self.quiet {
            println!("Could not place all tiles: {remaining_tiles} remaining.");
        }
    }
}
