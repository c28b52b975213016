//! Placed-tile progress bar
//!
//! Tracks how many tiles are on the board against the total to place.
//! Placements advance the bar, backtracks rewind it, so a thrashing search
//! is visible as a bar that oscillates instead of climbing.

use crate::algorithm::solver::SolveObserver;
use crate::spatial::tile::Tile;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Observer driving an indicatif bar of placed-vs-total tiles
pub struct ProgressObserver {
    bar: ProgressBar,
    backtracks: u64,
}

impl ProgressObserver {
    /// Create a bar for a search over `total_tiles` tiles
    ///
    /// `already_placed` accounts for tiles seeded onto the board before the
    /// search starts.
    pub fn new(total_tiles: u64, already_placed: u64) -> Self {
        let bar = ProgressBar::new(total_tiles);
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_position(already_placed);
        bar.set_message("placing");
        Self { bar, backtracks: 0 }
    }

    /// Number of backtrack events observed so far
    pub const fn backtracks(&self) -> u64 {
        self.backtracks
    }
}

impl SolveObserver for ProgressObserver {
    fn placement(&mut self, _row: usize, _col: usize, _tile: &Tile, _depth: usize) {
        self.bar.inc(1);
    }

    fn backtrack(&mut self, _row: usize, _col: usize, _tile: &Tile, _depth: usize) {
        self.backtracks += 1;
        let position = self.bar.position().saturating_sub(1);
        self.bar.set_position(position);
        self.bar.set_message(format!("placing ({} backtracks)", self.backtracks));
    }

    fn success(&mut self) {
        self.bar.finish_with_message("solved");
    }

    fn failure(&mut self, remaining_tiles: usize) {
        self.bar
            .abandon_with_message(format!("no solution, {remaining_tiles} tiles left"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backtracks_are_counted() {
        let mut progress = ProgressObserver::new(5, 1);
        let tile: Tile = "FFFF".parse().unwrap();

        progress.placement(0, 0, &tile, 0);
        progress.placement(0, 1, &tile, 1);
        progress.backtrack(0, 1, &tile, 1);

        assert_eq!(progress.backtracks(), 1);
        assert_eq!(progress.bar.position(), 2);
    }
}
