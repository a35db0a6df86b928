//! Fix & Optimize sub-tab: suggested fixes with their applied state

use autobot_app::{DetailShell, FixState};
use autobot_core::SuggestedFix;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{scroll_to, section_block};
use crate::theme::{icons::IconSet, palette, styles};

pub struct FixList<'a> {
    fixes: &'a [&'a SuggestedFix],
    detail: &'a DetailShell,
    icons: IconSet,
}

impl<'a> FixList<'a> {
    pub fn new(fixes: &'a [&'a SuggestedFix], detail: &'a DetailShell, icons: IconSet) -> Self {
        Self {
            fixes,
            detail,
            icons,
        }
    }

    fn fix_lines(&self, fix: &SuggestedFix, selected: bool) -> Vec<Line<'static>> {
        let badge = match self.detail.fix_state(&fix.id) {
            FixState::Applied => Span::styled(
                format!("[{} Applied]", self.icons.check()),
                Style::default().fg(palette::STATUS_GREEN),
            ),
            FixState::Proposed => Span::styled("[a] Apply Fix", styles::keybinding()),
        };

        let name_style = if selected {
            styles::focused_selected()
        } else {
            styles::heading()
        };

        let mut lines = vec![Line::from(vec![
            Span::styled(format!(" {} ", self.icons.wrench()), styles::accent()),
            Span::styled(fix.bot_name.clone(), name_style),
            Span::raw("  "),
            badge,
        ])];

        lines.extend(fix.changes.iter().map(|change| {
            Line::from(vec![
                Span::styled(format!("   {} ", self.icons.dot()), styles::text_muted()),
                Span::styled(change.clone(), styles::text_secondary()),
            ])
        }));

        lines.push(Line::from(vec![
            Span::styled("   Expected improvement: ", styles::text_muted()),
            Span::styled(
                fix.expected_improvement.clone(),
                Style::default().fg(palette::STATUS_GREEN),
            ),
        ]));
        lines.push(Line::default());
        lines
    }
}

impl Widget for FixList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = section_block("Suggested Fixes");
        let inner = block.inner(area);
        block.render(area, buf);

        if self.fixes.is_empty() {
            Paragraph::new(" No fixes suggested for this area.")
                .style(styles::text_muted())
                .render(inner, buf);
            return;
        }

        let cursor = self.detail.fix_cursor();
        let mut lines = Vec::new();
        let mut cursor_span = (0, 0);
        for (index, fix) in self.fixes.iter().enumerate() {
            let start = lines.len();
            lines.extend(self.fix_lines(fix, index == cursor));
            if index == cursor {
                cursor_span = (start, lines.len());
            }
        }

        let scroll = scroll_to(cursor_span.0, cursor_span.1, inner.height);
        Paragraph::new(lines).scroll((scroll, 0)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use autobot_app::config::IconMode;
    use autobot_core::{fixture, AreaId, FixId};

    fn render(detail: &DetailShell) -> TestTerminal {
        let report = fixture::builtin();
        let fixes: Vec<&SuggestedFix> = report.fixes_for(detail.area_id()).collect();
        let mut term = TestTerminal::wide();
        term.render_widget(
            FixList::new(&fixes, detail, IconSet::new(IconMode::Unicode)),
            term.area(),
        );
        term
    }

    #[test]
    fn test_fix_list_proposed() {
        let detail = DetailShell::new(AreaId::from("2"));
        let term = render(&detail);

        assert!(term.buffer_contains("Suggested Fixes"));
        assert!(term.buffer_contains("ERPUpdateBot"));
        assert!(term.buffer_contains("Add 3-retry policy"));
        assert!(term.buffer_contains("~85% reduction in failures"));
        assert!(term.buffer_contains("[a] Apply Fix"));
        assert!(!term.buffer_contains("Applied]"));
    }

    #[test]
    fn test_fix_list_shows_applied_state() {
        let mut detail = DetailShell::new(AreaId::from("2"));
        detail.apply_fix(FixId::from("1"));
        let term = render(&detail);

        assert!(term.buffer_contains("[✓ Applied]"));
        // The second fix is still proposed
        assert!(term.buffer_contains("[a] Apply Fix"));
    }

    #[test]
    fn test_fix_list_empty() {
        let detail = DetailShell::new(AreaId::from("2"));
        let mut term = TestTerminal::new();
        term.render_widget(
            FixList::new(&[], &detail, IconSet::new(IconMode::Unicode)),
            term.area(),
        );
        assert!(term.buffer_contains("No fixes suggested"));
    }
}
