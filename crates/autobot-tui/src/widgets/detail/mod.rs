//! Area detail view widgets
//!
//! The detail header and sub-tab bar, plus one module per sub-tab body.

mod bots;
mod fixes;
mod history;
mod insights;
mod issues;
mod overview;

pub use bots::BotsTable;
pub use fixes::FixList;
pub use history::RunHistory;
pub use insights::InsightList;
pub use issues::IssueList;
pub use overview::OverviewTab;

use autobot_app::DetailTab;
use autobot_core::{BotStatus, FunctionalArea};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Widget},
};

use crate::theme::{icons::IconSet, styles};

/// Bordered section with a heading
pub(crate) fn section_block(title: &str) -> Block<'_> {
    styles::glass_block(false).title(Span::styled(format!(" {} ", title), styles::heading()))
}

/// First line index to show so that `cursor_line..cursor_end` is visible
pub(crate) fn scroll_to(cursor_line: usize, cursor_end: usize, height: u16) -> u16 {
    let height = height as usize;
    if cursor_end <= height {
        0
    } else {
        cursor_line.min(cursor_end.saturating_sub(height)) as u16
    }
}

/// Breadcrumb, area title, overall status and last sync time
pub struct DetailHeader<'a> {
    area: &'a FunctionalArea,
    overall: BotStatus,
    last_sync: &'a str,
    aux_panel_open: bool,
    icons: IconSet,
}

impl<'a> DetailHeader<'a> {
    pub fn new(
        area: &'a FunctionalArea,
        overall: BotStatus,
        last_sync: &'a str,
        aux_panel_open: bool,
        icons: IconSet,
    ) -> Self {
        Self {
            area,
            overall,
            last_sync,
            aux_panel_open,
            icons,
        }
    }
}

impl Widget for DetailHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(styles::border_inactive());
        let inner = block.inner(area);
        block.render(area, buf);

        let (status_label, status_style) = styles::bot_status(self.overall);
        let panel_hint = if self.aux_panel_open {
            "Hide AI Diagnosis"
        } else {
            "AI Diagnosis"
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(" Dashboard ", styles::text_muted()),
                Span::styled(self.icons.chevron_right(), styles::text_muted()),
                Span::styled(format!(" {}", self.area.title), styles::text_secondary()),
            ]),
            Line::from(vec![
                Span::raw(" "),
                Span::styled(format!("{} Automation", self.area.title), styles::heading()),
                Span::raw("  "),
                Span::styled(format!("{} {}", self.icons.dot(), status_label), status_style),
            ]),
            Line::from(vec![
                Span::styled(
                    format!(" {} Last sync: {}", self.icons.clock(), self.last_sync),
                    styles::text_muted(),
                ),
                Span::raw("   "),
                Span::styled("[d] ", styles::keybinding()),
                Span::styled(
                    format!("{} {}", self.icons.sparkles(), panel_hint),
                    styles::text_secondary(),
                ),
            ]),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Numbered sub-tab bar for the detail view
pub struct DetailTabBar {
    active: DetailTab,
}

impl DetailTabBar {
    pub fn new(active: DetailTab) -> Self {
        Self { active }
    }
}

impl Widget for DetailTabBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Line<'static>> = DetailTab::ALL
            .iter()
            .enumerate()
            .map(|(i, tab)| Line::from(format!(" {} {} ", i + 1, tab.label())))
            .collect();

        Tabs::new(titles)
            .select(self.active.index())
            .style(styles::text_secondary())
            .highlight_style(styles::brand_selected())
            .divider("│")
            .render(area, buf);
    }
}
