//! # Connect Four
//!
//! A two-player Connect Four game for the terminal. The engine is a plain
//! value with explicit outcomes; the Ratatui front end maps those outcomes to
//! the screen and key presses back to engine calls.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, win detection, engine
//! - [`ui`] — Terminal UI: board view, notices, dialogs
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Move rejections and configuration errors

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
