//! Terminal UI: board view, transient notices, and the game-over and
//! score-reset dialogs, all driven by the game engine's outcomes.

mod app;
mod game_view;
pub mod notice;

pub use app::{App, Dialog, GameOver};
