//! The seam between the interaction layer and the remote rules engine.

use core::fmt;

use crate::coord::Coord;
use crate::state::{FireOutcome, GameState, Orientation, PlaceOutcome};

/// Failure of a remote action.
#[derive(Debug)]
pub enum SessionError {
    /// The channel itself failed (unreachable peer, timeout, bad payload).
    Transport(anyhow::Error),
    /// The peer rejected the action; carries the server's reason verbatim.
    Rejected(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Transport(err) => write!(f, "transport error: {err}"),
            SessionError::Rejected(reason) => write!(f, "{reason}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Transport(err) => err.source(),
            SessionError::Rejected(_) => None,
        }
    }
}

impl From<reqwest::Error> for SessionError {
    fn from(err: reqwest::Error) -> Self {
        SessionError::Transport(err.into())
    }
}

/// The four remote actions of the game session. Coordinates are converted to
/// labels at this boundary; raw pairs never cross the wire.
#[async_trait::async_trait]
pub trait SessionApi: Send {
    /// Fetch the full authoritative snapshot.
    async fn fetch_state(&mut self) -> Result<GameState, SessionError>;

    /// Start a fresh game. With `auto_place` the server populates the human
    /// fleet at random; otherwise manual placement begins on the next fetch.
    async fn start_new_game(&mut self, auto_place: bool) -> Result<(), SessionError>;

    /// Place the next pending ship from `start` in `orientation`. Fit and
    /// overlap are validated server-side.
    async fn place_ship(
        &mut self,
        start: Coord,
        orientation: Orientation,
    ) -> Result<PlaceOutcome, SessionError>;

    /// Fire at a cell of the opponent board.
    async fn fire(&mut self, target: Coord) -> Result<FireOutcome, SessionError>;
}
