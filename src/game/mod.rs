//! Core Connect Four game logic: board, players, four-in-a-row detection, the
//! turn/draw state machine, and the session engine that keeps score.

mod board;
mod engine;
mod player;
mod score;
mod state;
mod win;

pub use board::{Board, Cell, COLS, ROWS};
pub use engine::{DropOutcome, Engine};
pub use player::Player;
pub use score::Scores;
pub use state::{GameState, GameStatus, MoveResult};
pub use win::{find_winning_line, Orientation, WinningLine, WIN_LENGTH};
