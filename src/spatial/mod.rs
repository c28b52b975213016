//! Tile and board data structures
//!
//! This module contains the spatial state of a search:
//! - Typed tile edges, tiles, and constraint patterns
//! - The board grid with possibility counting and text serialization

/// Board grid, edge constraints, and possibility counting
pub mod board;
/// Edge types, tiles, and constraint patterns
pub mod tile;

pub use board::Board;
pub use tile::{Edge, Pattern, Tile};
