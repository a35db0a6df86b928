//! Confirm dialog state.
//!
//! Data model for confirmation dialogs. The rendering widget lives in
//! autobot-tui's `widgets/confirm_dialog.rs`.

use crate::message::Message;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    pub options: Vec<(String, Message)>,
}

impl ConfirmDialogState {
    /// Quit confirmation, mentioning fixes applied in the open session
    pub fn quit_confirmation(applied_fixes: usize) -> Self {
        let message = match applied_fixes {
            0 => "Leave the control center?".to_string(),
            1 => "1 fix was applied this session.".to_string(),
            n => format!("{} fixes were applied this session.", n),
        };
        Self {
            title: "Quit AutoBot?".to_string(),
            message,
            options: vec![
                ("Quit".to_string(), Message::ConfirmQuit),
                ("Cancel".to_string(), Message::CancelQuit),
            ],
        }
    }
}
