//! Board grid, edge constraints, and possibility counting
//!
//! The board is an R×C grid of optional tile placements. It computes the
//! constraint pattern each empty cell inherits from its placed neighbors and
//! counts how many pile tiles could legally fill each cell. Patterns are
//! recomputed on demand from current state, never cached across mutations.

use crate::algorithm::pile::Pile;
use crate::io::error::{Result, SolverError};
use crate::spatial::tile::{Pattern, Tile};
use ndarray::Array2;
use std::fmt;
use std::str::FromStr;

/// Rendered width of one cell in the board text form: `[XXXX]`
const CELL_TEXT_WIDTH: usize = 6;

/// Rendering of an empty cell in the board text form
const EMPTY_CELL_TEXT: &str = "[    ]";

/// Possibility summary for a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellPossibility {
    /// Number of pile tiles compatible with the cell's current pattern
    pub possibilities: usize,
    /// True when the cell already holds a tile
    pub already_placed: bool,
}

/// Mutable 2-D grid of optional tile placements
///
/// The board never holds a contradictory configuration mid-search: the
/// solver only places a tile after checking it against the cell's pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Array2<Option<Tile>>,
}

impl Board {
    /// Create an empty board with the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::default((rows, cols)),
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Tile at the given cell, if placed; `None` when empty or out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&Tile> {
        self.cells.get((row, col)).and_then(Option::as_ref)
    }

    /// Place a tile directly, without validation
    ///
    /// Validation against the cell's pattern is the solver's responsibility.
    /// Out-of-bounds placements are ignored.
    pub fn place(&mut self, row: usize, col: usize, tile: Tile) {
        if let Some(cell) = self.cells.get_mut((row, col)) {
            *cell = Some(tile);
        }
    }

    /// Clear a cell, leaving it empty
    pub fn clear(&mut self, row: usize, col: usize) {
        if let Some(cell) = self.cells.get_mut((row, col)) {
            *cell = None;
        }
    }

    /// True when every cell holds a tile
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of cells currently holding a tile
    pub fn placed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// True when at least one of the four grid-neighbors holds a tile
    ///
    /// Used to forbid placements disconnected from the growing placed
    /// region, preventing the search from spawning disjoint islands.
    pub fn has_adjacent_placed_tile(&self, row: usize, col: usize) -> bool {
        let up = row.checked_sub(1).and_then(|r| self.get(r, col));
        let down = self.get(row + 1, col);
        let left = col.checked_sub(1).and_then(|c| self.get(row, c));
        let right = self.get(row, col + 1);
        up.is_some() || down.is_some() || left.is_some() || right.is_some()
    }

    /// Constraint pattern the placed neighbors impose on a cell
    ///
    /// Each slot is the facing edge of the corresponding neighbor (the tile
    /// above contributes its bottom edge, and so on), or a wildcard when the
    /// neighbor is out of bounds or empty. Slot order mirrors tile edge
    /// order so a tile's edges compare slot-for-slot against the result.
    pub fn edge_pattern(&self, row: usize, col: usize) -> Pattern {
        Pattern {
            top: row
                .checked_sub(1)
                .and_then(|r| self.get(r, col))
                .map(|tile| tile.bottom()),
            right: self.get(row, col + 1).map(|tile| tile.left()),
            bottom: self.get(row + 1, col).map(|tile| tile.top()),
            left: col
                .checked_sub(1)
                .and_then(|c| self.get(row, c))
                .map(|tile| tile.right()),
        }
    }

    /// Possibility summary for every cell against the given pile
    ///
    /// Occupied cells report zero possibilities; empty cells report how many
    /// pile tiles match their current pattern. Recomputed fully on demand,
    /// with no incremental maintenance, which stays affordable at the target
    /// board sizes of tens of cells.
    pub fn possibility_grid(&self, pile: &Pile) -> Array2<CellPossibility> {
        Array2::from_shape_fn((self.rows(), self.cols()), |(row, col)| {
            if self.get(row, col).is_some() {
                CellPossibility {
                    possibilities: 0,
                    already_placed: true,
                }
            } else {
                CellPossibility {
                    possibilities: pile.count_matching(&self.edge_pattern(row, col)),
                    already_placed: false,
                }
            }
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols() {
                match self.get(row, col) {
                    Some(tile) => write!(f, "[{tile}]")?,
                    None => write!(f, "{EMPTY_CELL_TEXT}")?,
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self> {
        let lines: Vec<&str> = s.split('\n').collect();
        let rows = lines.len();
        let cols = lines.first().map_or(0, |line| line.len() / CELL_TEXT_WIDTH);

        let mut board = Self::new(rows, cols);

        for (row, line) in lines.iter().enumerate() {
            if line.len() != cols * CELL_TEXT_WIDTH {
                return Err(SolverError::BoardParse {
                    line: row + 1,
                    reason: format!("expected {cols} cells of the form [XXXX] or [    ]"),
                });
            }

            for col in 0..cols {
                let start = col * CELL_TEXT_WIDTH;
                let cell_text = line.get(start..start + CELL_TEXT_WIDTH).ok_or_else(|| {
                    SolverError::BoardParse {
                        line: row + 1,
                        reason: "cell boundary does not fall on a character boundary".to_string(),
                    }
                })?;

                if cell_text == EMPTY_CELL_TEXT {
                    continue;
                }

                let descriptor = cell_text
                    .strip_prefix('[')
                    .and_then(|rest| rest.strip_suffix(']'))
                    .ok_or_else(|| SolverError::BoardParse {
                        line: row + 1,
                        reason: format!("cell '{cell_text}' is not bracketed"),
                    })?;

                let tile: Tile = descriptor.parse().map_err(|err| SolverError::BoardParse {
                    line: row + 1,
                    reason: format!("cell '{cell_text}': {err}"),
                })?;
                board.place(row, col, tile);
            }
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Board {
        "[    ][    ][    ]\n[    ][RCCC][    ]\n[    ][    ][CCCC]"
            .parse()
            .unwrap()
    }

    #[test]
    fn test_board_text_round_trip() {
        let text = "[    ][    ][    ]\n[    ][RCCC][    ]\n[    ][    ][    ]";
        let board: Board = text.parse().unwrap();
        assert_eq!(board.to_string(), text);
        assert_eq!(board, board.to_string().parse().unwrap());

        let empty = Board::new(2, 2);
        assert_eq!(empty, empty.to_string().parse().unwrap());
    }

    #[test]
    fn test_board_parse_rejects_bad_rows() {
        assert!("[    ][    ]\n[    ]".parse::<Board>().is_err());
        assert!("[FFXF]".parse::<Board>().is_err());
        assert!("(FFFF)".parse::<Board>().is_err());
    }

    #[test]
    fn test_edge_pattern_is_all_wildcards_without_neighbors() {
        let board = Board::new(3, 3);
        for row in 0..3 {
            for col in 0..3 {
                assert!(board.edge_pattern(row, col).is_unconstrained());
            }
        }
    }

    #[test]
    fn test_edge_pattern_reads_facing_edges() {
        let board = fixture();

        let expected = [
            ["????", "??R?", "????"],
            ["?C??", "????", "??CC"],
            ["????", "CC??", "????"],
        ];

        for (row, expected_row) in expected.iter().enumerate() {
            for (col, want) in expected_row.iter().enumerate() {
                assert_eq!(
                    board.edge_pattern(row, col).to_string(),
                    *want,
                    "pattern mismatch at ({row}, {col})"
                );
            }
        }
    }

    #[test]
    fn test_possibility_grid_with_empty_pile() {
        let board = fixture();
        let grid = board.possibility_grid(&Pile::default());

        for (index, cell) in grid.indexed_iter() {
            let placed = matches!(index, (1, 1) | (2, 2));
            assert_eq!(cell.already_placed, placed, "at {index:?}");
            assert_eq!(cell.possibilities, 0, "at {index:?}");
        }
    }

    #[test]
    fn test_possibility_grid_counts_matching_tiles() {
        let board = fixture();
        let pile = Pile::from_descriptors(&["FFFF", "CCFF", "RCRC"]).unwrap();
        let grid = board.possibility_grid(&pile);

        let counts: Vec<usize> = grid.iter().map(|cell| cell.possibilities).collect();
        assert_eq!(counts, vec![3, 1, 3, 2, 0, 0, 3, 1, 0]);
        assert!(grid.get((1, 1)).unwrap().already_placed);
        assert!(grid.get((2, 2)).unwrap().already_placed);
    }

    #[test]
    fn test_adjacency_and_completion() {
        let mut board = Board::new(2, 2);
        assert!(!board.has_adjacent_placed_tile(0, 0));
        assert!(!board.is_complete());

        let tile: Tile = "FFFF".parse().unwrap();
        board.place(0, 0, tile);
        assert!(board.has_adjacent_placed_tile(0, 1));
        assert!(board.has_adjacent_placed_tile(1, 0));
        assert!(!board.has_adjacent_placed_tile(1, 1));
        assert_eq!(board.placed_count(), 1);

        board.place(0, 1, tile);
        board.place(1, 0, tile);
        board.place(1, 1, tile);
        assert!(board.is_complete());

        board.clear(1, 1);
        assert!(!board.is_complete());
        assert_eq!(board.get(1, 1), None);
    }
}
