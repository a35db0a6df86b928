//! Header bar widget
//!
//! Brand title, system status pill and the top-level nav tabs.

use autobot_app::NavTab;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Tabs, Widget},
};

use crate::theme::{icons::IconSet, palette, styles};

/// Main header showing the brand, system status and nav tabs
pub struct MainHeader {
    icons: IconSet,
    active_tab: NavTab,
}

impl MainHeader {
    pub fn new(icons: IconSet, active_tab: NavTab) -> Self {
        Self { icons, active_tab }
    }

    fn render_title_row(&self, area: Rect, buf: &mut Buffer) {
        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.zap(), styles::brand_bold()),
            Span::raw(" "),
            Span::styled("AutoBot", styles::brand_bold()),
            Span::raw("  "),
            Span::styled("Automation Control Center", styles::text_secondary()),
        ]);
        let left_width = left.width() as u16;
        buf.set_line(area.x, area.y, &left, area.width);

        let status = Line::from(vec![
            Span::styled(self.icons.activity(), Style::default().fg(palette::STATUS_GREEN)),
            Span::raw(" "),
            Span::styled("System Status: ", styles::text_muted()),
            Span::styled("All Systems Active", styles::text_primary()),
            Span::raw(" "),
        ]);
        let status_width = status.width() as u16;

        // Right-align the status pill only when it does not overlap the title
        if left_width + status_width + 2 <= area.width {
            let x = area.x + area.width - status_width;
            buf.set_line(x, area.y, &status, status_width);
        }
    }

    fn render_nav_row(&self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Line<'static>> = NavTab::ALL
            .iter()
            .enumerate()
            .map(|(i, tab)| {
                Line::from(vec![
                    Span::styled(format!(" F{} ", i + 1), styles::keybinding()),
                    Span::raw(format!("{} ", tab.label())),
                ])
            })
            .collect();

        let tabs = Tabs::new(titles)
            .select(self.active_tab.index())
            .style(styles::text_secondary())
            .highlight_style(styles::focused_selected())
            .divider("│");

        let padded = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: area.height,
        };
        tabs.render(padded, buf);
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        self.render_title_row(Rect { height: 1, ..inner }, buf);

        if inner.height >= 2 {
            let nav = Rect {
                y: inner.y + 1,
                height: 1,
                ..inner
            };
            self.render_nav_row(nav, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use autobot_app::config::IconMode;

    fn header(tab: NavTab) -> MainHeader {
        MainHeader::new(IconSet::new(IconMode::Unicode), tab)
    }

    #[test]
    fn test_header_renders_brand() {
        let mut term = TestTerminal::new();
        term.render_widget(header(NavTab::Automations), Rect::new(0, 0, 80, 4));

        assert!(term.line_contains(1, "AutoBot"));
        assert!(term.line_contains(1, "Automation Control Center"));
    }

    #[test]
    fn test_header_shows_system_status_when_wide() {
        let mut term = TestTerminal::wide();
        term.render_widget(header(NavTab::Automations), Rect::new(0, 0, 120, 4));

        assert!(term.buffer_contains("All Systems Active"));
    }

    #[test]
    fn test_header_hides_status_when_narrow() {
        let mut term = TestTerminal::compact();
        term.render_widget(header(NavTab::Automations), Rect::new(0, 0, 40, 4));

        assert!(!term.buffer_contains("All Systems Active"));
    }

    #[test]
    fn test_header_lists_nav_tabs() {
        let mut term = TestTerminal::new();
        term.render_widget(header(NavTab::Issues), Rect::new(0, 0, 80, 4));

        assert!(term.line_contains(2, "Automations"));
        assert!(term.line_contains(2, "Issues"));
        assert!(term.line_contains(2, "Insights"));
        assert!(term.line_contains(2, "Settings"));
        assert!(term.line_contains(2, "F2"));
    }

    #[test]
    fn test_header_highlights_active_tab() {
        let mut term = TestTerminal::new();
        term.render_widget(header(NavTab::Automations), Rect::new(0, 0, 80, 4));

        let buffer = term.buffer();
        let highlighted = (0..80).any(|x| {
            let cell = &buffer[(x, 2)];
            cell.symbol() == "A" && cell.bg == palette::ACCENT
        });
        assert!(highlighted, "Active nav tab should use the accent background");
    }
}
