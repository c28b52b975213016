//! Edge types, tiles, and constraint patterns
//!
//! A tile has four typed edges in fixed (top, right, bottom, left) order and
//! is never rotated. A pattern is the same shape with optional slots: a
//! concrete edge constrains that side, a wildcard accepts anything.

use crate::io::error::{Result, SolverError};
use std::fmt;
use std::str::FromStr;

/// Symbol accepted in pattern strings for an unconstrained slot
pub const WILDCARD: char = '?';

/// Edge type on one side of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Open field, symbol `F`
    Field,
    /// City wall, symbol `C`
    City,
    /// Stream, symbol `S`
    Stream,
    /// Road, symbol `R`
    Road,
}

impl Edge {
    /// All edge types in symbol order
    pub const ALL: [Self; 4] = [Self::Field, Self::City, Self::Stream, Self::Road];

    /// Single-character symbol for this edge type
    pub const fn symbol(self) -> char {
        match self {
            Self::Field => 'F',
            Self::City => 'C',
            Self::Stream => 'S',
            Self::Road => 'R',
        }
    }

    /// Parse a single edge symbol
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'F' => Some(Self::Field),
            'C' => Some(Self::City),
            'S' => Some(Self::Stream),
            'R' => Some(Self::Road),
            _ => None,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Constraint query over the four sides of a cell
///
/// Slots follow tile edge order so a tile's edges can be compared
/// slot-for-slot. `None` is a wildcard accepting any edge type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pattern {
    /// Constraint on the top edge
    pub top: Option<Edge>,
    /// Constraint on the right edge
    pub right: Option<Edge>,
    /// Constraint on the bottom edge
    pub bottom: Option<Edge>,
    /// Constraint on the left edge
    pub left: Option<Edge>,
}

impl Pattern {
    /// Pattern with every slot a wildcard
    pub const fn any() -> Self {
        Self {
            top: None,
            right: None,
            bottom: None,
            left: None,
        }
    }

    /// True when no slot constrains anything
    pub const fn is_unconstrained(&self) -> bool {
        self.top.is_none() && self.right.is_none() && self.bottom.is_none() && self.left.is_none()
    }
}

impl FromStr for Pattern {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self> {
        let slots = parse_four_symbols(s, true)?;
        let [top, right, bottom, left] = slots;
        Ok(Self {
            top,
            right,
            bottom,
            left,
        })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in [self.top, self.right, self.bottom, self.left] {
            match slot {
                Some(edge) => write!(f, "{edge}")?,
                None => write!(f, "{WILDCARD}")?,
            }
        }
        Ok(())
    }
}

/// Square tile with four typed edges in (top, right, bottom, left) order
///
/// Immutable once created; two tiles are equal iff all four edges are equal
/// in the same orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    top: Edge,
    right: Edge,
    bottom: Edge,
    left: Edge,
}

impl Tile {
    /// Create a tile from its four edges
    pub const fn new(top: Edge, right: Edge, bottom: Edge, left: Edge) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Top edge type
    pub const fn top(&self) -> Edge {
        self.top
    }

    /// Right edge type
    pub const fn right(&self) -> Edge {
        self.right
    }

    /// Bottom edge type
    pub const fn bottom(&self) -> Edge {
        self.bottom
    }

    /// Left edge type
    pub const fn left(&self) -> Edge {
        self.left
    }

    /// True when every non-wildcard slot of the pattern equals the
    /// corresponding edge of this tile
    pub const fn matches(&self, pattern: &Pattern) -> bool {
        slot_matches(self.top, pattern.top)
            && slot_matches(self.right, pattern.right)
            && slot_matches(self.bottom, pattern.bottom)
            && slot_matches(self.left, pattern.left)
    }

    /// Four-character descriptor in (top, right, bottom, left) order
    pub fn descriptor(&self) -> String {
        self.to_string()
    }
}

const fn slot_matches(edge: Edge, slot: Option<Edge>) -> bool {
    match slot {
        None => true,
        Some(constraint) => edge as u8 == constraint as u8,
    }
}

impl FromStr for Tile {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self> {
        let slots = parse_four_symbols(s, false)?;
        match slots {
            [Some(top), Some(right), Some(bottom), Some(left)] => Ok(Self {
                top,
                right,
                bottom,
                left,
            }),
            // Unreachable: wildcards were rejected above
            _ => Err(SolverError::invalid_descriptor(
                s,
                "wildcards are not allowed in tile descriptors",
            )),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}{}", self.top, self.right, self.bottom, self.left)
    }
}

/// Parse exactly four edge symbols, optionally accepting wildcards
fn parse_four_symbols(s: &str, allow_wildcard: bool) -> Result<[Option<Edge>; 4]> {
    let mut slots = [None; 4];
    let mut count = 0;

    for (i, symbol) in s.chars().enumerate() {
        if i >= 4 {
            return Err(SolverError::invalid_descriptor(
                s,
                "expected exactly 4 symbols",
            ));
        }
        let slot = if allow_wildcard && symbol == WILDCARD {
            None
        } else {
            Some(Edge::from_symbol(symbol).ok_or_else(|| {
                SolverError::invalid_descriptor(s, "symbols must be one of F, C, S, R")
            })?)
        };
        if let Some(entry) = slots.get_mut(i) {
            *entry = slot;
        }
        count += 1;
    }

    if count != 4 {
        return Err(SolverError::invalid_descriptor(
            s,
            "expected exactly 4 symbols",
        ));
    }

    Ok(slots)
}
