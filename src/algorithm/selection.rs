//! Position and tile selection heuristics
//!
//! Two greedy orderings drive the search. Positions are picked
//! most-constrained-first: among empty, adjacency-connected cells, the ones
//! with the fewest compatible tiles, failing fast where the board is
//! tightest. Tiles are picked scarcest-first: among tiles compatible with a
//! chosen cell, the one usable in the fewest board positions overall, so
//! inflexible tiles are committed while flexible ones stay in reserve.

use crate::algorithm::pile::Pile;
use crate::spatial::board::Board;
use crate::spatial::tile::Tile;

/// Empty cell tied for the minimum possibility count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateCell {
    /// Row of the cell
    pub row: usize,
    /// Column of the cell
    pub col: usize,
    /// Possibility count shared by all returned cells
    pub possibilities: usize,
}

/// Every eligible cell tied at the minimum positive possibility count
///
/// Eligible means empty and adjacent to at least one placed tile. All ties
/// are collected in row-major order; exhaustive backtracking needs every
/// minimal cell, not just the first one found. Returns an empty list when no
/// eligible cell has a positive count.
pub fn most_constrained_cells(board: &Board, pile: &Pile) -> Vec<CandidateCell> {
    let possibilities = board.possibility_grid(pile);

    let minimum = possibilities
        .indexed_iter()
        .filter(|((row, col), cell)| {
            !cell.already_placed
                && cell.possibilities > 0
                && board.has_adjacent_placed_tile(*row, *col)
        })
        .map(|(_, cell)| cell.possibilities)
        .min();

    let Some(minimum) = minimum else {
        return Vec::new();
    };

    possibilities
        .indexed_iter()
        .filter(|((row, col), cell)| {
            !cell.already_placed
                && cell.possibilities == minimum
                && board.has_adjacent_placed_tile(*row, *col)
        })
        .map(|((row, col), cell)| CandidateCell {
            row,
            col,
            possibilities: cell.possibilities,
        })
        .collect()
}

/// Number of eligible board positions whose pattern this tile satisfies
///
/// Counts every empty, adjacency-connected cell with a positive possibility
/// count, including the cell currently under consideration; candidates are
/// compared against each other, so the shared position cancels out.
pub fn placement_alternatives(tile: &Tile, board: &Board, pile: &Pile) -> usize {
    let possibilities = board.possibility_grid(pile);

    possibilities
        .indexed_iter()
        .filter(|((row, col), cell)| {
            !cell.already_placed
                && cell.possibilities > 0
                && board.has_adjacent_placed_tile(*row, *col)
                && tile.matches(&board.edge_pattern(*row, *col))
        })
        .count()
}

/// The candidate with the fewest alternative placements
///
/// Earlier candidates win ties, keeping the ordering deterministic for a
/// fixed pile order. Returns `None` for an empty candidate list.
pub fn scarcest_tile(candidates: &[Tile], board: &Board, pile: &Pile) -> Option<Tile> {
    let mut best: Option<(usize, Tile)> = None;

    for candidate in candidates {
        let alternatives = placement_alternatives(candidate, board, pile);
        let replace = best.is_none_or(|(fewest, _)| alternatives < fewest);
        if replace {
            best = Some((alternatives, *candidate));
        }
    }

    best.map(|(_, tile)| tile)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Board, Pile) {
        let board: Board = "[    ][    ][    ]\n[    ][RCCC][    ]\n[    ][    ][    ]"
            .parse()
            .unwrap();
        let pile = Pile::from_descriptors(&["FFFF", "CCFF", "RCRC"]).unwrap();
        (board, pile)
    }

    #[test]
    fn test_most_constrained_cells_collects_all_ties_row_major() {
        let (board, pile) = fixture();

        let cells = most_constrained_cells(&board, &pile);
        let positions: Vec<(usize, usize, usize)> = cells
            .iter()
            .map(|cell| (cell.row, cell.col, cell.possibilities))
            .collect();

        // Counts around the center: (0,1)=1, (1,0)=2, (1,2)=1, (2,1)=1
        assert_eq!(positions, vec![(0, 1, 1), (1, 2, 1), (2, 1, 1)]);
    }

    #[test]
    fn test_most_constrained_cells_ignores_disconnected_cells() {
        let (board, _) = fixture();
        let pile = Pile::from_descriptors(&["FFFF"]).unwrap();

        // FFFF matches no cell bordering RCCC, so nothing is eligible even
        // though every disconnected cell would accept it
        assert!(most_constrained_cells(&board, &pile).is_empty());
    }

    #[test]
    fn test_most_constrained_cells_empty_pile() {
        let (board, _) = fixture();
        assert!(most_constrained_cells(&board, &Pile::default()).is_empty());
    }

    #[test]
    fn test_placement_alternatives_counts_matching_positions() {
        let (board, pile) = fixture();

        let rcrc: Tile = "RCRC".parse().unwrap();
        // Matches (0,1) "??R?", (1,0) "?C??", and (1,2) "???C" but not (2,1) "C???"
        assert_eq!(placement_alternatives(&rcrc, &board, &pile), 3);

        let ccff: Tile = "CCFF".parse().unwrap();
        // Matches (1,0) "?C??" and (2,1) "C???"
        assert_eq!(placement_alternatives(&ccff, &board, &pile), 2);
    }

    #[test]
    fn test_scarcest_tile_prefers_fewest_alternatives() {
        let (board, pile) = fixture();

        let rcrc: Tile = "RCRC".parse().unwrap();
        let ccff: Tile = "CCFF".parse().unwrap();

        assert_eq!(scarcest_tile(&[rcrc, ccff], &board, &pile), Some(ccff));
        // Ties keep the earlier candidate
        assert_eq!(scarcest_tile(&[ccff, ccff], &board, &pile), Some(ccff));
        assert_eq!(scarcest_tile(&[], &board, &pile), None);
    }
}
