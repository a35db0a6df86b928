//! Abstract input key event, independent of terminal library.
//!
//! Keeps autobot-app free of crossterm types; the TUI converts
//! `crossterm::event::KeyEvent` into `InputKey` at its boundary.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, ...)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,

    /// Function key (F1-F12)
    F(u8),
}

impl InputKey {
    /// Digit value of a number key
    pub fn digit(&self) -> Option<usize> {
        match self {
            InputKey::Char(c) => c.to_digit(10).map(|d| d as usize),
            _ => None,
        }
    }
}
