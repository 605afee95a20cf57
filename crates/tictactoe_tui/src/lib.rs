//! Terminal front end for tic-tac-toe with move history.
//!
//! The game itself lives in [`tictactoe_timeline`]. This crate hosts it in
//! a terminal: it draws the board, status line and move list with
//! `ratatui`, and turns mouse clicks and key presses into session actions.
//!
//! - [`components`]: stateless widgets with matching hit-tests
//! - [`App`]: owns the session and routes input
//! - [`ui`]: screen layout and drawing
//! - [`terminal`]: raw mode, alternate screen and mouse capture
//! - [`UiConfig`]: settings loaded from TOML

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
pub mod components;
mod config;
pub mod input;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use config::{ConfigError, UiConfig};
