//! Tile-set loading and random pile generation
//!
//! A tile-set file is a sequence of lines, each blank (ignored) or a
//! 4-character descriptor, read in order to form the initial draw order.

use crate::algorithm::pile::Pile;
use crate::io::error::{Result, SolverError};
use crate::spatial::tile::{Edge, Tile};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::io::BufRead;
use std::path::Path;

/// Load a pile from a tile-set file
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, or if any
/// non-blank line is not a valid descriptor; the error carries the 1-based
/// line number and surfaces before any solving begins.
pub fn load_from_path(path: &Path) -> Result<Pile> {
    let file = std::fs::File::open(path).map_err(|source| SolverError::FileSystem {
        path: path.to_path_buf(),
        operation: "open tile set",
        source,
    })?;
    from_reader(std::io::BufReader::new(file))
}

/// Read a pile from any line-oriented source
///
/// # Errors
///
/// Returns [`SolverError::InvalidDescriptor`] with the offending line
/// number, or [`SolverError::FileSystem`] for read failures.
pub fn from_reader(reader: impl BufRead) -> Result<Pile> {
    let mut tiles = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let tile: Tile = trimmed.parse().map_err(|err: SolverError| err.at_line(index + 1))?;
        tiles.push(tile);
    }

    Ok(Pile::from_tiles(tiles))
}

/// Generate a pile of uniformly random tiles with a seeded generator
///
/// The same seed and count always produce the same draw order, keeping
/// random runs reproducible.
pub fn random_pile(count: usize, seed: u64) -> Pile {
    let mut rng = StdRng::seed_from_u64(seed);
    let tiles = (0..count)
        .map(|_| {
            Tile::new(
                random_edge(&mut rng),
                random_edge(&mut rng),
                random_edge(&mut rng),
                random_edge(&mut rng),
            )
        })
        .collect();
    Pile::from_tiles(tiles)
}

fn random_edge(rng: &mut StdRng) -> Edge {
    let index = rng.random_range(0..Edge::ALL.len());
    Edge::ALL.get(index).copied().unwrap_or(Edge::Field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_descriptors_in_order_skipping_blanks() {
        let source = "FFFF\n\n  CCFF  \n\nRCRC\n";
        let pile = from_reader(Cursor::new(source)).unwrap();

        let descriptors: Vec<String> =
            pile.tiles().iter().map(ToString::to_string).collect();
        assert_eq!(descriptors, vec!["FFFF", "CCFF", "RCRC"]);
    }

    #[test]
    fn test_reports_line_number_of_bad_descriptor() {
        let source = "FFFF\n\nFCXF\n";
        let err = from_reader(Cursor::new(source)).unwrap_err();
        match err {
            SolverError::InvalidDescriptor { line, .. } => assert_eq!(line, Some(3)),
            _ => unreachable!("Expected InvalidDescriptor error type"),
        }
    }

    #[test]
    fn test_load_from_path() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "SSSS\nFCFC").unwrap();

        let pile = load_from_path(file.path()).unwrap();
        assert_eq!(pile.len(), 2);

        assert!(load_from_path(Path::new("does/not/exist.txt")).is_err());
    }

    #[test]
    fn test_random_pile_is_reproducible() {
        let a = random_pile(20, 7);
        let b = random_pile(20, 7);
        let c = random_pile(20, 8);

        assert_eq!(a, b);
        assert_eq!(a.len(), 20);
        assert_ne!(a, c, "different seeds should give different piles");
    }
}
