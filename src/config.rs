use std::path::Path;

use crate::error::ConfigError;
use crate::game::{Player, COLS};

/// Display names for the two players.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one_name: String,
    pub two_name: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            one_name: Player::One.name().to_string(),
            two_name: Player::Two.name().to_string(),
        }
    }
}

impl PlayersConfig {
    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::One => &self.one_name,
            Player::Two => &self.two_name,
        }
    }
}

/// Terminal UI behaviour.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long a transient notice (e.g. "column full") stays on screen
    pub notice_duration_ms: u64,
    /// Input poll timeout; also bounds how late a notice can expire
    pub tick_rate_ms: u64,
    /// Column the cursor starts on, 0-based
    pub start_column: usize,
    /// Ask before wiping the score tally
    pub confirm_score_reset: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            notice_duration_ms: 1500,
            tick_rate_ms: 100,
            start_column: 3,
            confirm_score_reset: true,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: PlayersConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.one_name.trim().is_empty() || self.players.two_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "player names must not be empty".into(),
            ));
        }
        if self.players.one_name == self.players.two_name {
            return Err(ConfigError::Validation(
                "players.one_name and players.two_name must differ".into(),
            ));
        }
        if self.ui.notice_duration_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.notice_duration_ms must be > 0".into(),
            ));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.tick_rate_ms must be > 0".into(),
            ));
        }
        if self.ui.start_column >= COLS {
            return Err(ConfigError::Validation(format!(
                "ui.start_column must be < {COLS}"
            )));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
