//! Centralized theme for the control center.
//!
//! - `palette`: raw color constants
//! - `styles`: semantic style builders (status badges, blocks, highlights)
//! - `icons`: Nerd Font glyphs with Unicode fallbacks

pub mod icons;
pub mod palette;
pub mod styles;
