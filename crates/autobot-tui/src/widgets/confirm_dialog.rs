//! Confirmation dialog widget for the quit confirmation

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use autobot_app::confirm_dialog::ConfirmDialogState;

use super::modal_overlay;
use crate::theme::{palette, styles};

/// Confirmation dialog widget
pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }

    /// Key hints for the dialog options: the first confirms, the rest cancel
    fn option_spans(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        for (index, (label, _)) in self.state.options.iter().enumerate() {
            let (key, color) = if index == 0 {
                ("y", palette::STATUS_GREEN)
            } else {
                ("n", palette::STATUS_RED)
            };
            if index > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(
                key,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(format!("] {}", label), styles::text_muted()));
        }
        spans
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = modal_overlay::prepare_modal(buf, area, 50, 7);

        let title = format!(" {} ", self.state.title);
        let block = styles::modal_block(&title).title_alignment(Alignment::Center);
        let inner = block.inner(modal);
        block.render(modal, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Message
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
            Constraint::Min(0),
        ])
        .split(inner);

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette::STATUS_YELLOW))
            .render(chunks[1], buf);

        Paragraph::new(Line::from(self.option_spans()))
            .alignment(Alignment::Center)
            .render(chunks[3], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_confirm_dialog_renders_title_and_message() {
        let mut term = TestTerminal::new();
        let state = ConfirmDialogState::quit_confirmation(0);
        term.render_widget(ConfirmDialog::new(&state), term.area());

        assert!(term.buffer_contains("Quit AutoBot?"));
        assert!(term.buffer_contains("Leave the control center?"));
    }

    #[test]
    fn test_confirm_dialog_shows_options() {
        let mut term = TestTerminal::new();
        let state = ConfirmDialogState::quit_confirmation(2);
        term.render_widget(ConfirmDialog::new(&state), term.area());

        assert!(term.buffer_contains("2 fixes were applied this session."));
        assert!(term.buffer_contains("[y] Quit"));
        assert!(term.buffer_contains("[n] Cancel"));
    }

    #[test]
    fn test_confirm_dialog_compact() {
        let mut term = TestTerminal::compact();
        let state = ConfirmDialogState::quit_confirmation(1);
        term.render_widget(ConfirmDialog::new(&state), term.area());

        assert!(term.buffer_contains("Quit AutoBot?"));
    }
}
