//! Overview sub-tab: summary figures, bot workflow chain and AI observations

use autobot_core::{AutomationSummary, Bot, Insight, SuccessBand};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::section_block;
use crate::theme::{icons::IconSet, styles};

/// Observations listed under "Recent AI Observations"
const MAX_OBSERVATIONS: usize = 3;

pub struct OverviewTab<'a> {
    summary: &'a AutomationSummary,
    bots: &'a [&'a Bot],
    insights: &'a [&'a Insight],
    bot_cursor: usize,
    icons: IconSet,
}

impl<'a> OverviewTab<'a> {
    pub fn new(
        summary: &'a AutomationSummary,
        bots: &'a [&'a Bot],
        insights: &'a [&'a Insight],
        bot_cursor: usize,
        icons: IconSet,
    ) -> Self {
        Self {
            summary,
            bots,
            insights,
            bot_cursor,
            icons,
        }
    }

    fn render_summary(&self, area: Rect, buf: &mut Buffer) {
        let block = section_block("Automation Summary");
        let inner = block.inner(area);
        block.render(area, buf);

        let s = self.summary;
        let rate_style = styles::success_band(SuccessBand::from_percent(s.success_rate_7d));
        let figures = Line::from(vec![
            Span::styled(" Success Rate (7d) ", styles::text_muted()),
            Span::styled(format!("{}%", s.success_rate_7d), rate_style),
            Span::styled("   Failures ", styles::text_muted()),
            Span::styled(s.failures_7d.to_string(), styles::text_primary()),
            Span::styled("   Avg Runtime ", styles::text_muted()),
            Span::styled(s.avg_runtime.clone(), styles::text_primary()),
        ]);
        let schedule = Line::from(vec![
            Span::styled(" Hours Saved (MTD) ", styles::text_muted()),
            Span::styled(s.hours_saved_mtd.to_string(), styles::text_primary()),
            Span::styled("   Next Run ", styles::text_muted()),
            Span::styled(s.next_run.clone(), styles::accent()),
        ]);

        Paragraph::new(vec![figures, schedule]).render(inner, buf);
    }

    fn render_workflow(&self, area: Rect, buf: &mut Buffer) {
        let block = section_block("Functional Workflow");
        let inner = block.inner(area);
        block.render(area, buf);

        if self.bots.is_empty() {
            Paragraph::new(" No bots in this area.")
                .style(styles::text_muted())
                .render(inner, buf);
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        for (index, bot) in self.bots.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(
                    format!(" {} ", self.icons.chevron_right()),
                    styles::text_muted(),
                ));
            }
            let (_, status_style) = styles::bot_status(bot.status);
            spans.push(Span::styled(self.icons.dot(), status_style));
            spans.push(Span::raw(" "));
            let name_style = if index == self.bot_cursor {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(bot.name.clone(), name_style));
        }

        let hint = Line::from(vec![
            Span::styled(" [Enter] ", styles::keybinding()),
            Span::styled("Bot details", styles::text_muted()),
        ]);

        Paragraph::new(vec![Line::from(spans), hint])
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }

    fn render_observations(&self, area: Rect, buf: &mut Buffer) {
        let block = section_block("Recent AI Observations");
        let inner = block.inner(area);
        block.render(area, buf);

        if self.insights.is_empty() {
            Paragraph::new(" No observations yet.")
                .style(styles::text_muted())
                .render(inner, buf);
            return;
        }

        let lines: Vec<Line> = self
            .insights
            .iter()
            .take(MAX_OBSERVATIONS)
            .map(|insight| {
                Line::from(vec![
                    Span::styled(
                        format!(" {} ", self.icons.sparkles()),
                        styles::insight_kind(insight.kind),
                    ),
                    Span::styled(insight.title.clone(), styles::text_primary()),
                    Span::styled(format!("  {}", insight.description), styles::text_muted()),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

impl Widget for OverviewTab<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Min(3),
        ])
        .split(area);

        self.render_summary(rows[0], buf);
        self.render_workflow(rows[1], buf);
        self.render_observations(rows[2], buf);
    }
}
