//! History sub-tab: seven-day analytics and the recent runs table

use autobot_core::{RunAnalytics, RunHistoryEntry, SuccessBand};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, Widget},
};

use super::section_block;
use crate::theme::styles;

pub struct RunHistory<'a> {
    analytics: &'a RunAnalytics,
    runs: &'a [&'a RunHistoryEntry],
}

impl<'a> RunHistory<'a> {
    pub fn new(analytics: &'a RunAnalytics, runs: &'a [&'a RunHistoryEntry]) -> Self {
        Self { analytics, runs }
    }

    fn render_analytics(&self, area: Rect, buf: &mut Buffer) {
        let block = section_block("Run Analytics (7 Days)");
        let inner = block.inner(area);
        block.render(area, buf);

        let a = self.analytics;
        let lines = vec![
            Line::from(vec![
                Span::styled(" Total Runs ", styles::text_muted()),
                Span::styled(a.total_runs.to_string(), styles::text_primary()),
                Span::styled("   Success Rate ", styles::text_muted()),
                Span::styled(
                    format!("{}%", a.success_rate),
                    styles::success_band(SuccessBand::from_percent(a.success_rate)),
                ),
            ]),
            Line::from(vec![
                Span::styled(" Peak Failure Hours ", styles::text_muted()),
                Span::styled(a.peak_failure_hours.clone(), styles::text_primary()),
                Span::styled("   Top Failing Bot ", styles::text_muted()),
                Span::styled(a.top_failing_bot.clone(), styles::accent()),
            ]),
        ];

        Paragraph::new(lines).render(inner, buf);
    }

    fn render_runs(&self, area: Rect, buf: &mut Buffer) {
        let block = section_block("Recent Runs");
        let inner = block.inner(area);
        block.render(area, buf);

        if self.runs.is_empty() {
            Paragraph::new(" No runs recorded.")
                .style(styles::text_muted())
                .render(inner, buf);
            return;
        }

        let header = Row::new(vec!["Time", "Bot", "Result", "Runtime", "Error"])
            .style(styles::heading());

        let rows: Vec<Row> = self
            .runs
            .iter()
            .map(|run| {
                Row::new(vec![
                    Cell::from(run.timestamp.clone()),
                    Cell::from(run.bot_name.clone()),
                    Cell::from(Span::styled(
                        run.outcome.label(),
                        styles::run_outcome(&run.outcome),
                    )),
                    Cell::from(run.runtime.clone()),
                    Cell::from(Span::styled(
                        run.outcome.error().unwrap_or("").to_string(),
                        styles::text_muted(),
                    )),
                ])
                .style(styles::text_secondary())
            })
            .collect();

        let widths = [
            Constraint::Length(9),
            Constraint::Length(26),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Min(10),
        ];

        Table::new(rows, widths)
            .header(header)
            .column_spacing(1)
            .render(inner, buf);
    }
}

impl Widget for RunHistory<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::vertical([Constraint::Length(4), Constraint::Min(3)]).split(area);
        self.render_analytics(rows[0], buf);
        self.render_runs(rows[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use autobot_core::{fixture, AreaId};

    #[test]
    fn test_history_renders_analytics_and_runs() {
        let report = fixture::builtin();
        let area = AreaId::from("1");
        let runs: Vec<&RunHistoryEntry> = report.runs_for(&area).collect();

        let mut term = TestTerminal::wide();
        term.render_widget(RunHistory::new(&report.analytics, &runs), term.area());

        assert!(term.buffer_contains("Run Analytics (7 Days)"));
        assert!(term.buffer_contains("Peak Failure Hours"));
        assert!(term.buffer_contains("Top Failing Bot ERPUpdateBot"));
        assert!(term.buffer_contains("Recent Runs"));
        assert!(term.buffer_contains("SAP API Timeout (504)"));
        assert!(term.buffer_contains("Success"));
        assert!(term.buffer_contains("Fail"));
    }

    #[test]
    fn test_history_without_runs() {
        let analytics = RunAnalytics::default();
        let mut term = TestTerminal::new();
        term.render_widget(RunHistory::new(&analytics, &[]), term.area());

        assert!(term.buffer_contains("No runs recorded."));
    }
}
