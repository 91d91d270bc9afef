mod client;
mod config;
mod controller;
mod coord;
mod feedback;
mod logging;
mod phase;
mod reconcile;
mod session;
mod state;
mod view;

pub use client::HttpSession;
pub use config::*;
pub use controller::GameController;
pub use coord::{Coord, InvalidLabel};
pub use feedback::FeedbackLog;
pub use logging::init_logging;
pub use phase::Phase;
pub use reconcile::{derive_render_model, RenderModel};
pub use session::{SessionApi, SessionError};
pub use state::*;
pub use view::{BoardView, Cell, Mark};
