//! Terminal front end for the drill engine.
//!
//! Wires the deck loader, the quiz session, and the crossterm UI
//! together behind a small CLI.

pub mod config;
pub mod error;
pub mod loader;
pub mod ui;
