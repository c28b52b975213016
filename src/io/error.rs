//! Error types for tile ingestion, solving, and output

use std::fmt;
use std::path::PathBuf;

/// Main error type for all solver operations
#[derive(Debug)]
pub enum SolverError {
    /// Requested a tile from an empty pile
    ///
    /// A programming-contract violation: the solver checks emptiness before
    /// drawing, so this is never expected during correct operation.
    EmptyPile {
        /// Pile operation that was attempted
        operation: &'static str,
    },

    /// Removal requested for a tile not present in the pile
    ///
    /// Indicates a solver invariant violation; never caught and retried
    /// within the search.
    TileNotFound {
        /// Descriptor of the missing tile
        descriptor: String,
    },

    /// Malformed tile or pattern descriptor at ingestion time
    InvalidDescriptor {
        /// The offending descriptor text
        text: String,
        /// 1-based source line, when read from a tile-set file
        line: Option<usize>,
        /// Explanation of why the descriptor is invalid
        reason: &'static str,
    },

    /// Malformed board text fixture
    BoardParse {
        /// 1-based row of the offending line
        line: usize,
        /// Description of what's wrong with the line
        reason: String,
    },

    /// The search exhausted all branches without placing every tile
    ///
    /// The only error that is part of normal operation; the board and pile
    /// are left in their fully unwound state for inspection.
    NoSolutionFound {
        /// Tiles still in the pile when the search gave up
        remaining_tiles: usize,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to export the placement animation
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl SolverError {
    /// Create an invalid descriptor error without source line information
    pub fn invalid_descriptor(text: &str, reason: &'static str) -> Self {
        Self::InvalidDescriptor {
            text: text.to_string(),
            line: None,
            reason,
        }
    }

    /// Attach a 1-based source line to an `InvalidDescriptor` error
    ///
    /// Other error kinds pass through unchanged.
    pub fn at_line(self, source_line: usize) -> Self {
        match self {
            Self::InvalidDescriptor { text, reason, .. } => Self::InvalidDescriptor {
                text,
                line: Some(source_line),
                reason,
            },
            other => other,
        }
    }
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPile { operation } => {
                write!(f, "Pile is empty during {operation}")
            }
            Self::TileNotFound { descriptor } => {
                write!(f, "Tile '{descriptor}' not found in the pile")
            }
            Self::InvalidDescriptor { text, line, reason } => match line {
                Some(line) => {
                    write!(f, "Invalid tile descriptor '{text}' on line {line}: {reason}")
                }
                None => write!(f, "Invalid tile descriptor '{text}': {reason}"),
            },
            Self::BoardParse { line, reason } => {
                write!(f, "Invalid board text on row {line}: {reason}")
            }
            Self::NoSolutionFound { remaining_tiles } => {
                write!(
                    f,
                    "No solution found with the given tile set ({remaining_tiles} tiles unplaced)"
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export animation to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SolverError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;
