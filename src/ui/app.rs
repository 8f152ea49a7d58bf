use crate::config::AppConfig;
use crate::game::{DropOutcome, Engine, Player, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::debug;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use super::notice::Notice;

/// How a finished game ended, for the game-over dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOver {
    Won(Player),
    Draw,
}

/// Modal overlay currently shown on top of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    GameOver(GameOver),
    ConfirmScoreReset,
}

pub struct App {
    engine: Engine,
    config: AppConfig,
    selected_column: usize,
    should_quit: bool,
    notice: Option<Notice>,
    dialog: Option<Dialog>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        App {
            engine: Engine::new(),
            selected_column: config.ui.start_column,
            config,
            should_quit: false,
            notice: None,
            dialog: None,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn dialog(&self) -> Option<Dialog> {
        self.dialog
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Text of the transient notice, if one is showing
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().map(Notice::text)
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            self.expire_notice(Instant::now());

            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Drop the notice once its time is up
    pub fn expire_notice(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notice = None;
        }
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        let mut timeout = Duration::from_millis(self.config.ui.tick_rate_ms);
        if let Some(notice) = &self.notice {
            timeout = timeout.min(notice.remaining(Instant::now()));
        }

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.dialog {
            Some(Dialog::ConfirmScoreReset) => self.handle_confirm_key(key),
            Some(Dialog::GameOver(_)) => self.handle_game_over_key(key),
            None => self.handle_board_key(key),
        }
    }

    fn handle_board_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='7') => {
                let column = c as usize - '1' as usize;
                self.selected_column = column;
                self.drop_piece(column);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.restart();
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                if self.config.ui.confirm_score_reset {
                    self.dialog = Some(Dialog::ConfirmScoreReset);
                } else {
                    self.reset_scores();
                }
            }
            _ => {}
        }
    }

    fn handle_game_over_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('p') | KeyCode::Char('r') | KeyCode::Char('R') => {
                self.restart();
            }
            KeyCode::Char('c') | KeyCode::Esc => {
                self.dialog = None;
            }
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.dialog = None;
                self.reset_scores();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.dialog = None;
            }
            _ => {}
        }
    }

    /// Drop a piece and turn the outcome into notices or dialogs
    fn drop_piece(&mut self, column: usize) {
        match self.engine.drop_piece(column) {
            DropOutcome::Rejected(rejection) => {
                self.show_notice(rejection.to_string());
            }
            DropOutcome::Continue { next } => {
                debug!("waiting on {}", self.config.players.name(next));
                self.notice = None;
            }
            DropOutcome::Win { player, .. } => {
                self.notice = None;
                self.dialog = Some(Dialog::GameOver(GameOver::Won(player)));
            }
            DropOutcome::Draw => {
                self.notice = None;
                self.dialog = Some(Dialog::GameOver(GameOver::Draw));
            }
        }
    }

    fn restart(&mut self) {
        self.engine.new_game();
        self.dialog = None;
        self.notice = None;
        self.selected_column = self.config.ui.start_column;
    }

    /// Wipe the tally and start over on a fresh board
    fn reset_scores(&mut self) {
        self.engine.reset_scores();
        self.restart();
        self.show_notice("Scores reset.");
    }

    fn show_notice(&mut self, text: impl Into<String>) {
        let duration = Duration::from_millis(self.config.ui.notice_duration_ms);
        self.notice = Some(Notice::new(text, duration, Instant::now()));
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, self);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, GameStatus};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    fn press_digits(app: &mut App, digits: &str) {
        for c in digits.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_digit_keys_drop_into_column() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('7'));

        assert_eq!(app.engine().board().get(5, 6), Cell::PlayerOne);
        assert_eq!(app.engine().current_player(), Player::Two);
        assert_eq!(app.selected_column(), 6);
    }

    #[test]
    fn test_cursor_and_enter() {
        let mut app = App::default();
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.engine().board().get(5, 1), Cell::PlayerOne);

        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column(), COLS - 1);
    }

    #[test]
    fn test_full_column_shows_notice() {
        let mut app = App::default();
        press_digits(&mut app, "111111");
        press(&mut app, KeyCode::Char('1'));

        assert_eq!(app.notice(), Some("Column 1 is full! Try another column."));
        assert_eq!(app.engine().status(), GameStatus::Active);
        assert!(app.dialog().is_none());
    }

    #[test]
    fn test_notice_clears_after_expiry() {
        let mut app = App::default();
        press_digits(&mut app, "1111111");
        assert!(app.notice().is_some());

        app.expire_notice(Instant::now() + Duration::from_secs(60));
        assert!(app.notice().is_none());
    }

    #[test]
    fn test_win_opens_dialog_and_restart_keeps_score() {
        let mut app = App::default();
        press_digits(&mut app, "1212121");

        assert_eq!(app.dialog(), Some(Dialog::GameOver(GameOver::Won(Player::One))));

        press(&mut app, KeyCode::Enter);
        assert!(app.dialog().is_none());
        assert_eq!(app.engine().status(), GameStatus::Active);
        assert_eq!(app.engine().scores().get(Player::One), 1);
    }

    #[test]
    fn test_closed_dialog_rejects_moves() {
        let mut app = App::default();
        press_digits(&mut app, "1212121");
        press(&mut app, KeyCode::Esc);
        assert!(app.dialog().is_none());
        assert!(!app.should_quit());

        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.notice(), Some("The game is over! Press 'r' to play again."));
        assert_eq!(app.engine().board().get(5, 3), Cell::Empty);
    }

    #[test]
    fn test_score_reset_needs_confirmation() {
        let mut app = App::default();
        press_digits(&mut app, "1212121");
        press(&mut app, KeyCode::Char('c'));

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.dialog(), Some(Dialog::ConfirmScoreReset));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.engine().scores().get(Player::One), 1);

        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.engine().scores().get(Player::One), 0);
        assert_eq!(app.engine().status(), GameStatus::Active);
        assert!(app.dialog().is_none());
    }

    #[test]
    fn test_score_reset_without_confirmation() {
        let mut config = AppConfig::default();
        config.ui.confirm_score_reset = false;
        let mut app = App::new(config);
        press_digits(&mut app, "1212121");
        press(&mut app, KeyCode::Char('c'));

        press(&mut app, KeyCode::Char('s'));
        assert!(app.dialog().is_none());
        assert_eq!(app.engine().scores().get(Player::One), 0);
    }

    #[test]
    fn test_quit() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
