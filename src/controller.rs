//! Binds user gestures to the session client, reconciler, and views.
//!
//! The controller owns the single most recent authoritative snapshot; every
//! successful refresh replaces it wholesale and repaints both boards from it.
//! Remote failures are recovered here: they are narrated to the feedback log
//! and the prior rendered state stands until the next successful refresh.

use crate::coord::Coord;
use crate::feedback::FeedbackLog;
use crate::phase::Phase;
use crate::reconcile::derive_render_model;
use crate::session::SessionApi;
use crate::state::{GameState, Orientation, ShotResult, Winner};
use crate::view::BoardView;

pub struct GameController {
    session: Box<dyn SessionApi>,
    log: FeedbackLog,
    state: Option<GameState>,
    own: BoardView,
    opponent: BoardView,
    place_start: Option<Coord>,
}

fn narrate_shot(who: &str, shot: &ShotResult) -> String {
    let mut line = format!("{who} fired {}: {}", shot.label, shot.result);
    if let Some(name) = &shot.sunk {
        line.push_str(&format!(" ({name} sunk)"));
    }
    line
}

impl GameController {
    pub fn new(session: Box<dyn SessionApi>) -> Self {
        Self::with_log(session, FeedbackLog::default())
    }

    pub fn with_log(session: Box<dyn SessionApi>, log: FeedbackLog) -> Self {
        Self {
            session,
            log,
            state: None,
            own: BoardView::new(false),
            opponent: BoardView::new(true),
            place_start: None,
        }
    }

    /// Phase derived from the latest snapshot; `None` before the first fetch.
    pub fn phase(&self) -> Option<Phase> {
        self.state.as_ref().map(Phase::of)
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn own_view(&self) -> &BoardView {
        &self.own
    }

    pub fn opponent_view(&self) -> &BoardView {
        &self.opponent
    }

    pub fn log(&self) -> &FeedbackLog {
        &self.log
    }

    pub fn place_start(&self) -> Option<Coord> {
        self.place_start
    }

    /// Fetch a fresh snapshot and repaint both boards from it. On failure the
    /// error is narrated and the prior rendered state is left unchanged.
    pub async fn refresh(&mut self) {
        match self.session.fetch_state().await {
            Ok(state) => self.apply(state),
            Err(err) => self.log.push(format!("Error: {err}")),
        }
    }

    fn apply(&mut self, state: GameState) {
        self.own.paint(&derive_render_model(&state.human, true));
        self.opponent.paint(&derive_render_model(&state.ai, false));
        let phase = Phase::of(&state);
        self.opponent.set_interactive(phase.allows_fire());
        let was_over = self.state.as_ref().is_some_and(|s| s.over);
        if state.over && !was_over {
            let line = match state.winner {
                Some(Winner::Human) => "You win! The enemy fleet is destroyed.",
                Some(Winner::Ai) => "Opponent wins. Your fleet is destroyed.",
                None => "Game over.",
            };
            self.log.push(line);
        }
        self.state = Some(state);
    }

    /// Fire at a cell of the opponent board. Rejected with a feedback notice,
    /// before any remote call, unless the phase is `Battle`.
    pub async fn fire_at(&mut self, target: Coord) {
        match self.phase() {
            Some(Phase::Battle) => {}
            Some(Phase::Over) => {
                self.log.push("The game is over. Start a new game to keep playing.");
                return;
            }
            Some(Phase::Placing) => {
                self.log.push("Finish placing your ships before firing.");
                return;
            }
            None => {
                self.log.push("No game in progress. Start a new game first.");
                return;
            }
        }
        match self.session.fire(target).await {
            Ok(outcome) => {
                self.log.push(narrate_shot("You", &outcome.human));
                if let Some(ai) = &outcome.ai {
                    self.log.push(narrate_shot("Opponent", ai));
                }
                self.refresh().await;
            }
            Err(err) => self.log.push(format!("Error: {err}")),
        }
    }

    /// [`Self::fire_at`] for a typed cell label; malformed input is narrated
    /// and no remote call is made.
    pub async fn fire_label(&mut self, label: &str) {
        match Coord::parse(label) {
            Ok(target) => self.fire_at(target).await,
            Err(err) => self.log.push(format!("Error: {err}")),
        }
    }

    /// Selecting a cell of the own board pre-fills the placement start and
    /// does nothing else; the ship is placed only by the place command.
    pub fn select_own_cell(&mut self, coord: Coord) {
        self.place_start = Some(coord);
        self.log.push(format!("Placement start set to {coord}."));
    }

    /// [`Self::select_own_cell`] for a typed cell label.
    pub fn select_own_label(&mut self, label: &str) {
        match Coord::parse(label) {
            Ok(coord) => self.select_own_cell(coord),
            Err(err) => self.log.push(format!("Error: {err}")),
        }
    }

    /// Place the next pending ship. `start` overrides the pre-filled cell;
    /// empty or unparseable input fails fast without a remote call.
    pub async fn place(&mut self, start: Option<&str>, orientation: Orientation) {
        match self.phase() {
            Some(Phase::Placing) => {}
            _ => {
                self.log.push("No ship placement is pending.");
                return;
            }
        }
        let coord = match start {
            Some(label) if label.trim().is_empty() => {
                self.log.push("Enter a start cell like A1.");
                return;
            }
            Some(label) => match Coord::parse(label) {
                Ok(coord) => coord,
                Err(err) => {
                    self.log.push(format!("Placement error: {err}"));
                    return;
                }
            },
            None => match self.place_start {
                Some(coord) => coord,
                None => {
                    self.log.push("Enter a start cell like A1.");
                    return;
                }
            },
        };
        match self.session.place_ship(coord, orientation).await {
            Ok(outcome) => {
                self.place_start = None;
                if outcome.done {
                    self.log.push("Placed ship. All ships placed! The battle begins.");
                } else {
                    self.log.push("Placed ship.");
                }
                self.refresh().await;
            }
            Err(err) => self.log.push(format!("Placement error: {err}")),
        }
    }

    /// Start a fresh game in the chosen placement mode, then refresh.
    pub async fn new_game(&mut self, auto_place: bool) {
        match self.session.start_new_game(auto_place).await {
            Ok(()) => {
                self.place_start = None;
                let mut line = String::from("New game started.");
                if !auto_place {
                    line.push_str(" Manual placement enabled.");
                }
                self.log.push(line);
                self.refresh().await;
            }
            Err(err) => self.log.push(format!("Error: {err}")),
        }
    }

    /// Prompt naming the ship to place next, while placing.
    pub fn placement_prompt(&self) -> Option<String> {
        let state = self.state.as_ref()?;
        if !state.placing {
            return None;
        }
        let next = state.next_ship.as_ref()?;
        Some(format!(
            "Next ship: {} (size {}). Choose a start cell and orientation.",
            next.name, next.size
        ))
    }
}
