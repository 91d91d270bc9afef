//! Terminal rendering of a 10×10 board.
//!
//! A [`BoardView`] is the grid surface: every cell carries its visual class
//! set plus an interactivity flag for the whole board. Painting applies the
//! class precedence rules; rendering turns the grid into the labelled text
//! block printed after each command.

use core::fmt::Write as _;

use crate::config::BOARD_SIZE;
use crate::coord::Coord;
use crate::reconcile::RenderModel;

const N: usize = BOARD_SIZE as usize;

/// Base visual class of a cell. At most one applies; hits and misses win
/// over a plain ship mark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mark {
    #[default]
    Empty,
    Hit,
    Miss,
    Ship,
}

/// One cell of the surface: a base mark plus the sunk overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub mark: Mark,
    pub sunk: bool,
}

impl Cell {
    fn glyph(&self) -> char {
        if self.sunk {
            return '#';
        }
        match self.mark {
            Mark::Empty => '.',
            Mark::Hit => 'X',
            Mark::Miss => 'o',
            Mark::Ship => 'S',
        }
    }
}

/// A 10×10 grid surface with row-letter and column-number headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    cells: [[Cell; N]; N],
    interactive: bool,
}

impl BoardView {
    /// Fresh surface with every cell cleared.
    pub fn new(interactive: bool) -> Self {
        Self {
            cells: [[Cell::default(); N]; N],
            interactive,
        }
    }

    /// Replace the grid contents with a cleared one. Safe to call repeatedly.
    pub fn rebuild(&mut self, interactive: bool) {
        *self = Self::new(interactive);
    }

    /// Whether the interaction layer treats clicks on this board as commands.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    pub fn cell(&self, coord: Coord) -> Cell {
        self.cells[coord.row() as usize][coord.col() as usize]
    }

    /// Set every cell's class set from `model`. Precedence: hit/miss over
    /// plain ship; sunk overlays whatever base mark applies. An empty model
    /// clears the whole grid.
    pub fn paint(&mut self, model: &RenderModel) {
        for r in 0..N {
            for c in 0..N {
                let coord = Coord(r as u8, c as u8);
                let mark = if model.hits.contains(&coord) {
                    Mark::Hit
                } else if model.misses.contains(&coord) {
                    Mark::Miss
                } else if model.ships.contains(&coord) {
                    Mark::Ship
                } else {
                    Mark::Empty
                };
                self.cells[r][c] = Cell {
                    mark,
                    sunk: model.sunk.contains(&coord),
                };
            }
        }
    }

    /// Text block: column numbers across the top, row letters down the side.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("   ");
        for c in 0..N {
            let _ = write!(out, " {:>2}", c + 1);
        }
        out.push('\n');
        for r in 0..N {
            let _ = write!(out, " {} ", (b'A' + r as u8) as char);
            for c in 0..N {
                let _ = write!(out, "  {}", self.cells[r][c].glyph());
            }
            out.push('\n');
        }
        out
    }
}
