//! Configuration file parsing for AutoBot
//!
//! Supports `.autobot/config.toml` under the config directory.

pub mod settings;
pub mod types;

pub use settings::{config_file_path, load_settings, resolve_provider};
pub use types::*;
