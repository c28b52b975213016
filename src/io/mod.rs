//! Input/output operations, CLI driver, and error handling
//!
//! Everything here is a thin collaborator around the solver: tile-set
//! ingestion, console and progress reporting, GIF capture of the placement
//! history, and the command-line runner.

/// Command-line interface and solve runner
pub mod cli;
/// Runtime configuration defaults
pub mod configuration;
/// Console board snapshots with optional pacing
pub mod console;
/// Error types for ingestion, solving, and output
pub mod error;
/// Placed-tile progress bar
pub mod progress;
/// Tile-set loading and random pile generation
pub mod tileset;
/// Placement history capture and GIF export
pub mod visualization;
