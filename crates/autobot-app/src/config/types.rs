//! Configuration types for AutoBot
//!
//! Defines `Settings` (`.autobot/config.toml`) and its sections.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::dashboard::NavTab;

/// Application settings (.autobot/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub report: ReportSettings,
}

/// Icon rendering mode.
///
/// Controls whether the UI uses Nerd Font glyphs (requires a patched font)
/// or safe Unicode characters (works in all terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,

    /// Nav tab shown at start-up
    #[serde(default)]
    pub default_nav_tab: NavTab,
}

/// Behavior settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Ask before quitting
    #[serde(default)]
    pub confirm_quit: bool,
}

/// Report source settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ReportSettings {
    /// JSON snapshot to load instead of the built-in fixture.
    /// Relative paths resolve against the config directory.
    #[serde(default)]
    pub fixture: Option<PathBuf>,
}
