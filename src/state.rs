//! Wire-level game state as reported by the rules server.
//!
//! A [`GameState`] is fetched wholesale on every refresh and replaces the
//! previous one; the client never mutates or merges it. Optional fields model
//! the server's documented presence conditions: `ships` is populated only for
//! the board the viewer may see in full, `next_ship` only while placing, and
//! the `ai` shot result only when the opponent actually took its turn.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::coord::Coord;

/// Orientation of a ship, `"H"` or `"V"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "H")]
    Horizontal,
    #[serde(rename = "V")]
    Vertical,
}

impl Orientation {
    /// Parse a user-entered orientation, accepting `h`/`v` in either case.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "H" | "h" => Some(Orientation::Horizontal),
            "V" | "v" => Some(Orientation::Vertical),
            _ => None,
        }
    }
}

/// One ship of the revealed fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipSnapshot {
    pub name: String,
    pub size: usize,
    #[serde(default)]
    pub coords: Vec<Coord>,
    pub sunk: bool,
}

/// Point-in-time copy of one board. `ships` is empty for the opponent board;
/// unknown server fields (`size`, `shots`, `all_sunk`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    #[serde(default)]
    pub hits: Vec<Coord>,
    #[serde(default)]
    pub misses: Vec<Coord>,
    #[serde(default)]
    pub ships: Vec<ShipSnapshot>,
}

/// The ship the player must place next, present only during placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextShip {
    pub name: String,
    pub size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Human,
    Ai,
}

/// Authoritative snapshot of the whole game, fetched on every refresh.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    #[serde(default)]
    pub human: BoardSnapshot,
    #[serde(default)]
    pub ai: BoardSnapshot,
    #[serde(default)]
    pub placing: bool,
    #[serde(default)]
    pub next_ship: Option<NextShip>,
    /// Names of opponent ships the human has sunk.
    #[serde(default)]
    pub human_sunk: Vec<String>,
    /// Names of human ships the opponent has sunk.
    #[serde(default)]
    pub ai_sunk: Vec<String>,
    #[serde(default)]
    pub over: bool,
    #[serde(default)]
    pub winner: Option<Winner>,
}

/// Effect of a single shot. The engine reports `sunk` for the final hit of a
/// ship and `already` for a cell fired on before (an outcome, not an error).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShotEffect {
    Hit,
    Miss,
    Sunk,
    Already,
}

impl fmt::Display for ShotEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotEffect::Hit => write!(f, "hit"),
            ShotEffect::Miss => write!(f, "miss"),
            ShotEffect::Sunk => write!(f, "sunk"),
            ShotEffect::Already => write!(f, "already fired"),
        }
    }
}

/// One resolved shot, narrated back to the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotResult {
    pub label: String,
    pub result: ShotEffect,
    /// Name of the ship this shot sank, if any.
    #[serde(default)]
    pub sunk: Option<String>,
}

/// Response to a fire request. `ai` is absent when the game ended on the
/// human's shot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireOutcome {
    pub human: ShotResult,
    #[serde(default)]
    pub ai: Option<ShotResult>,
}

/// Response to a placement request. `done` signals the fleet is complete and
/// the battle begins on the next refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceOutcome {
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub next_ship: Option<NextShip>,
}
