//! Ordered multiset of tiles awaiting placement
//!
//! Order is the draw order, and the search depends on it being reproducible:
//! every tile removed during a search frame is either left placed or put back
//! at the exact slot it came from before the frame returns, so two runs on
//! the same input walk the same tree.

use crate::io::error::{Result, SolverError};
use crate::spatial::tile::{Pattern, Tile};

/// Ordered, mutable multiset of tiles
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pile {
    tiles: Vec<Tile>,
}

impl Pile {
    /// Create a pile from tiles in draw order
    pub const fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Parse a pile from tile descriptors in draw order
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidDescriptor`] for any malformed entry.
    pub fn from_descriptors(descriptors: &[&str]) -> Result<Self> {
        let tiles = descriptors
            .iter()
            .map(|descriptor| descriptor.parse())
            .collect::<Result<Vec<Tile>>>()?;
        Ok(Self { tiles })
    }

    /// Number of tiles remaining
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True when no tiles remain
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles in current draw order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// First tile without removing it
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::EmptyPile`] when the pile is empty.
    pub fn peek_front(&self) -> Result<&Tile> {
        self.tiles
            .first()
            .ok_or(SolverError::EmptyPile { operation: "peek" })
    }

    /// Remove and return the first tile
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::EmptyPile`] when the pile is empty.
    pub fn pop_front(&mut self) -> Result<Tile> {
        if self.tiles.is_empty() {
            return Err(SolverError::EmptyPile { operation: "pop" });
        }
        Ok(self.tiles.remove(0))
    }

    /// Insert a tile at the front, restoring draw order after a pop
    pub fn push_front(&mut self, tile: Tile) {
        self.tiles.insert(0, tile);
    }

    /// All tiles matching the pattern, in current order
    ///
    /// Does not mutate the pile.
    pub fn filter(&self, pattern: &Pattern) -> Vec<Tile> {
        self.tiles
            .iter()
            .filter(|tile| tile.matches(pattern))
            .copied()
            .collect()
    }

    /// Count of tiles matching the pattern, without allocating
    ///
    /// Called once per empty cell per recursion level, so it stays a plain
    /// scan over the remaining tiles.
    pub fn count_matching(&self, pattern: &Pattern) -> usize {
        self.tiles.iter().filter(|tile| tile.matches(pattern)).count()
    }

    /// Remove the first tile equal to the given one, returning its slot index
    ///
    /// The returned index is the undo token: [`Pile::restore`] with the same
    /// index and tile reproduces the exact prior order. Duplicate tiles are
    /// indistinguishable by value, so removal takes the first occurrence;
    /// restoring by recorded slot keeps the round trip unambiguous anyway.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::TileNotFound`] when no equal tile is present.
    /// This indicates a solver invariant violation and is not recoverable.
    pub fn remove(&mut self, tile: &Tile) -> Result<usize> {
        let index = self
            .tiles
            .iter()
            .position(|candidate| candidate == tile)
            .ok_or_else(|| SolverError::TileNotFound {
                descriptor: tile.descriptor(),
            })?;
        self.tiles.remove(index);
        Ok(index)
    }

    /// Reinsert a tile at the slot index recorded by [`Pile::remove`]
    ///
    /// Indices past the end append, which cannot occur for a matched
    /// remove/restore pair.
    pub fn restore(&mut self, index: usize, tile: Tile) {
        let index = index.min(self.tiles.len());
        self.tiles.insert(index, tile);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pile() -> Pile {
        Pile::from_descriptors(&["FFFF", "CCFF", "RCRC"]).unwrap()
    }

    #[test]
    fn test_peek_and_pop_follow_draw_order() {
        let mut pile = pile();
        assert_eq!(pile.peek_front().unwrap().to_string(), "FFFF");
        assert_eq!(pile.pop_front().unwrap().to_string(), "FFFF");
        assert_eq!(pile.pop_front().unwrap().to_string(), "CCFF");
        assert_eq!(pile.len(), 1);
    }

    #[test]
    fn test_empty_pile_errors() {
        let mut empty = Pile::default();
        assert!(matches!(
            empty.peek_front(),
            Err(SolverError::EmptyPile { .. })
        ));
        assert!(matches!(
            empty.pop_front(),
            Err(SolverError::EmptyPile { .. })
        ));
    }

    #[test]
    fn test_pop_push_pairs_preserve_contents_and_order() {
        let mut pile = pile();
        let before = pile.clone();

        for _ in 0..3 {
            let tile = pile.pop_front().unwrap();
            pile.push_front(tile);
        }
        assert_eq!(pile, before);
    }

    #[test]
    fn test_filter_and_count_agree() {
        let pile = Pile::from_descriptors(&["FFFF", "CCFF", "RCRC", "FRFF"]).unwrap();

        // Right edge constrained to Road
        let pattern: Pattern = "?R??".parse().unwrap();
        let matches = pile.filter(&pattern);
        assert_eq!(pile.count_matching(&pattern), matches.len());
        assert_eq!(matches.len(), 1);
        assert_eq!(matches.first().unwrap().to_string(), "FRFF");

        // No tile in the original trio has a Road right edge
        assert_eq!(self::pile().count_matching(&pattern), 0);

        assert_eq!(pile.count_matching(&Pattern::any()), 4);
        assert_eq!(pile.len(), 4, "filter must not mutate the pile");
    }

    #[test]
    fn test_remove_takes_first_value_equal_occurrence() {
        let mut pile = Pile::from_descriptors(&["CCFF", "FFFF", "CCFF"]).unwrap();
        let tile: Tile = "CCFF".parse().unwrap();

        let index = pile.remove(&tile).unwrap();
        assert_eq!(index, 0);
        assert_eq!(pile.len(), 2);
        assert_eq!(pile.peek_front().unwrap().to_string(), "FFFF");

        let missing: Tile = "SSSS".parse().unwrap();
        assert!(matches!(
            pile.remove(&missing),
            Err(SolverError::TileNotFound { .. })
        ));
    }

    #[test]
    fn test_remove_restore_round_trip() {
        let mut pile = pile();
        let before = pile.clone();

        let tile: Tile = "CCFF".parse().unwrap();
        let index = pile.remove(&tile).unwrap();
        assert_eq!(index, 1);
        pile.restore(index, tile);
        assert_eq!(pile, before);
    }
}
