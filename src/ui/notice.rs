use std::time::{Duration, Instant};

/// A short-lived status message, such as "Column 3 is full!".
///
/// Setting a new notice replaces the old one, which cancels its timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    text: String,
    expires_at: Instant,
}

impl Notice {
    pub fn new(text: impl Into<String>, duration: Duration, now: Instant) -> Self {
        Notice {
            text: text.into(),
            expires_at: now + duration,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    /// Time left before the notice goes away, zero once expired
    pub fn remaining(&self, now: Instant) -> Duration {
        self.expires_at.saturating_duration_since(now)
    }
}
