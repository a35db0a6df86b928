//! autobot-app - Application state and navigation for AutoBot
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the [`DashboardShell`] / [`DetailShell`] navigation model,
//! messages, the `update` function, key mapping, configuration loading and
//! OS signal handling. It has no terminal dependency; autobot-tui renders it.

pub mod config;
pub mod confirm_dialog;
pub mod dashboard;
pub mod detail;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use dashboard::{DashboardShell, NavTab};
pub use detail::{DetailShell, DetailTab, FixState};
pub use handler::{update, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use process::process_message;
pub use state::{AppPhase, AppState, UiMode};
