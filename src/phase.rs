//! Game flow phases and the actions each one permits.

use crate::state::GameState;

/// Current phase of the game flow. Always a pure projection of the latest
/// authoritative snapshot; never tracked as separately mutated client state,
/// so it cannot drift from the server's notion of phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Placing,
    Battle,
    Over,
}

impl Phase {
    /// Compute the phase from a snapshot: `over` wins, then `placing`.
    pub fn of(state: &GameState) -> Self {
        if state.over {
            Phase::Over
        } else if state.placing {
            Phase::Placing
        } else {
            Phase::Battle
        }
    }

    /// Firing at the opponent board is only allowed mid-battle.
    pub fn allows_fire(self) -> bool {
        matches!(self, Phase::Battle)
    }

    /// Ship placement is only allowed while the fleet is incomplete.
    pub fn allows_place(self) -> bool {
        matches!(self, Phase::Placing)
    }

    /// Starting a new game is allowed in every phase, and is the only way out
    /// of `Over`.
    pub fn allows_new_game(self) -> bool {
        true
    }
}
