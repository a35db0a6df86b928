//! Key hint footer

use autobot_app::{DetailTab, NavTab};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

/// Which key map is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterContext {
    Dashboard(NavTab),
    Detail(DetailTab),
    BotModal,
    Confirm,
}

pub struct Footer {
    context: FooterContext,
}

impl Footer {
    pub fn new(context: FooterContext) -> Self {
        Self { context }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.context {
            FooterContext::Dashboard(nav_tab) => {
                let mut hints = Vec::new();
                if nav_tab == NavTab::Automations {
                    hints.push(("↑↓", "Move"));
                    hints.push(("Enter", "Open area"));
                }
                hints.extend([("Tab", "Next tab"), ("F1-F4", "Nav"), ("q", "Quit")]);
                hints
            }
            FooterContext::Detail(tab) => {
                let mut hints = vec![("Esc", "Back"), ("1-6", "Tabs")];
                match tab {
                    DetailTab::Overview | DetailTab::Bots => {
                        hints.push(("↑↓", "Bot"));
                        hints.push(("Enter", "Bot details"));
                    }
                    DetailTab::FixOptimize => {
                        hints.push(("↑↓", "Fix"));
                        hints.push(("a", "Apply fix"));
                    }
                    DetailTab::History | DetailTab::Issues | DetailTab::AiInsights => {}
                }
                hints.push(("d", "AI Diagnosis"));
                hints.push(("q", "Quit"));
                hints
            }
            FooterContext::BotModal => vec![("Esc", "Close"), ("Ctrl+C", "Quit")],
            FooterContext::Confirm => vec![("y", "Confirm"), ("n", "Cancel")],
        }
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (index, (key, action)) in self.hints().into_iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled("  ", styles::text_muted()));
            }
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}", action), styles::text_muted()));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
