//! Cell coordinates and their human-readable labels.
//!
//! A cell is addressed either as a `(row, col)` pair in `[0,10)×[0,10)` or as
//! a label such as `"C7"` (row letter A–J, 1-based column number). Labels are
//! the only cell form that crosses the wire; the coordinate pair is a local
//! convenience. The two forms are a bijection over the 100 cells.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::BOARD_SIZE;

/// A board cell, serialized on the wire as a two-element `[row, col]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord(pub u8, pub u8);

/// Error for labels that do not name a cell in `A1..J10`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLabel(pub String);

impl fmt::Display for InvalidLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid cell label {:?} (expected A1..J10)", self.0)
    }
}

impl std::error::Error for InvalidLabel {}

impl Coord {
    /// Construct from a pair, rejecting out-of-range components.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Coord(row, col))
        } else {
            None
        }
    }

    pub fn row(&self) -> u8 {
        self.0
    }

    pub fn col(&self) -> u8 {
        self.1
    }

    /// Uppercase label of this cell, e.g. `(0,0) -> "A1"`, `(9,9) -> "J10"`.
    pub fn label(&self) -> String {
        format!("{}{}", (b'A' + self.0) as char, self.1 + 1)
    }

    /// Parse a label, case-insensitively and ignoring surrounding whitespace.
    /// Exact left inverse of [`Coord::label`].
    pub fn parse(input: &str) -> Result<Self, InvalidLabel> {
        let err = || InvalidLabel(input.to_string());
        let s = input.trim();
        let mut chars = s.chars();
        let row_ch = chars.next().ok_or_else(err)?.to_ascii_uppercase();
        if !row_ch.is_ascii_uppercase() {
            return Err(err());
        }
        let row = row_ch as u8 - b'A';
        let col: u8 = chars.as_str().parse().map_err(|_| err())?;
        if col == 0 {
            return Err(err());
        }
        Coord::new(row, col - 1).ok_or_else(err)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Coord {
    type Err = InvalidLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coord::parse(s)
    }
}
