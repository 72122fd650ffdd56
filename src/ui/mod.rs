//! GUI module for the Gobang game
//!
//! A native front end using egui/eframe. It only drives [`GameState`] and
//! draws the board; all rules live in the core modules.
//!
//! [`GameState`]: crate::game::GameState

mod app;
mod board_view;
mod theme;

pub use app::GobangApp;
