use super::win::{find_winning_line, WinningLine};
use super::{Board, Player};
use crate::error::Rejection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    WonBy(Player),
    Drawn,
}

/// What a successful placement led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Won(WinningLine),
    Drawn,
    Next(Player),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    winning_line: Option<WinningLine>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::One,
            status: GameStatus::Active,
            winning_line: None,
        }
    }

    /// Get current player. After a win this is still the winner.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The run that ended the game, if it was won
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::Active
    }

    /// Place the current player's piece and advance the game.
    ///
    /// The win check runs first, so a move that fills the board and completes
    /// four in a row is a win. The turn only passes when the game continues.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<MoveResult, Rejection> {
        if self.is_terminal() {
            return Err(Rejection::NotActive);
        }

        let player = self.current_player;
        let cell = player.to_cell();
        let row = self.board.drop_piece(column, cell)?;

        if let Some(line) = find_winning_line(&self.board, row, column, cell) {
            self.status = GameStatus::WonBy(player);
            self.winning_line = Some(line);
            return Ok(MoveResult::Won(line));
        }

        if self.board.is_full() {
            self.status = GameStatus::Drawn;
            return Ok(MoveResult::Drawn);
        }

        self.current_player = player.other();
        Ok(MoveResult::Next(self.current_player))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
