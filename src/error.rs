use std::path::PathBuf;

/// Why the engine refused a drop. Never fatal: the board is left unchanged and
/// the game stays playable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("The game is over! Press 'r' to play again.")]
    NotActive,

    #[error("Column {} is full! Try another column.", .column.saturating_add(1))]
    ColumnFull { column: usize },

    #[error("There is no column {}.", .column.saturating_add(1))]
    InvalidColumn { column: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
