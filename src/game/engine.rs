use log::{debug, info};

use super::score::Scores;
use super::state::{GameState, GameStatus, MoveResult};
use super::win::WinningLine;
use super::{Board, Player};
use crate::error::Rejection;

/// Result of a single `drop_piece` call. Exactly one applies per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Nothing changed
    Rejected(Rejection),
    /// Piece placed, turn passed to `next`
    Continue { next: Player },
    Win {
        player: Player,
        line: WinningLine,
        scores: Scores,
    },
    Draw,
}

/// A session of Connect Four: the current game plus the running score.
///
/// The board and turn are replaced by [`Engine::new_game`]; the score tally
/// lives until [`Engine::reset_scores`].
#[derive(Debug, Clone, Default)]
pub struct Engine {
    game: GameState,
    scores: Scores,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh board with Player 1 to move. Scores are kept.
    pub fn new_game(&mut self) {
        self.game = GameState::initial();
        info!(
            "new game started (score {}-{})",
            self.scores.get(Player::One),
            self.scores.get(Player::Two)
        );
    }

    /// Drop the current player's piece into `column`.
    pub fn drop_piece(&mut self, column: usize) -> DropOutcome {
        let player = self.game.current_player();

        match self.game.apply_move_mut(column) {
            Err(rejection) => {
                debug!("drop in column {column} rejected: {rejection:?}");
                DropOutcome::Rejected(rejection)
            }
            Ok(MoveResult::Won(line)) => {
                self.scores.record_win(player);
                info!(
                    "{} wins with a {} line {:?}",
                    player.name(),
                    line.orientation.name(),
                    line.cells
                );
                DropOutcome::Win {
                    player,
                    line,
                    scores: self.scores,
                }
            }
            Ok(MoveResult::Drawn) => {
                info!("game drawn");
                DropOutcome::Draw
            }
            Ok(MoveResult::Next(next)) => {
                debug!("{} dropped in column {column}", player.name());
                DropOutcome::Continue { next }
            }
        }
    }

    /// Zero both counters. The board is left alone.
    pub fn reset_scores(&mut self) {
        self.scores.reset();
        info!("scores reset");
    }

    pub fn board(&self) -> &Board {
        self.game.board()
    }

    pub fn current_player(&self) -> Player {
        self.game.current_player()
    }

    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.game.winning_line()
    }
}
