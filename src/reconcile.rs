//! Reconciliation of an authoritative board snapshot into a render model.

use std::collections::HashSet;

use crate::coord::Coord;
use crate::state::BoardSnapshot;

/// Per-board set of cells to draw in each visual class. Precedence between
/// classes is applied at paint time, not here: `hits`/`misses` win over a
/// plain `ships` mark, while `sunk` is an additive overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderModel {
    pub hits: HashSet<Coord>,
    pub misses: HashSet<Coord>,
    pub ships: HashSet<Coord>,
    pub sunk: HashSet<Coord>,
}

impl RenderModel {
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty() && self.misses.is_empty() && self.ships.is_empty() && self.sunk.is_empty()
    }
}

/// Derive the render model for one board. With `reveal_ships` false the
/// `ships` and `sunk` sets stay empty whatever the snapshot carries; this is
/// the confidentiality boundary that keeps the opponent board from leaking
/// unsunk ship positions. Pure: same input, same output.
pub fn derive_render_model(snapshot: &BoardSnapshot, reveal_ships: bool) -> RenderModel {
    let mut model = RenderModel {
        hits: snapshot.hits.iter().copied().collect(),
        misses: snapshot.misses.iter().copied().collect(),
        ..RenderModel::default()
    };
    if reveal_ships {
        for ship in &snapshot.ships {
            model.ships.extend(ship.coords.iter().copied());
            if ship.sunk {
                model.sunk.extend(ship.coords.iter().copied());
            }
        }
    }
    model
}
