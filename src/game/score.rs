use super::Player;

/// Wins per player for the current session. Survives new games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scores {
    one: u32,
    two: u32,
}

impl Scores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::One => self.one,
            Player::Two => self.two,
        }
    }

    pub fn record_win(&mut self, player: Player) {
        match player {
            Player::One => self.one += 1,
            Player::Two => self.two += 1,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
