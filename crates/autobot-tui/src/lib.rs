//! autobot-tui - Terminal UI for AutoBot
//!
//! The ratatui-based dashboard. Takes an `AppState` from autobot-app and adds
//! terminal rendering, event polling and widget display.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
