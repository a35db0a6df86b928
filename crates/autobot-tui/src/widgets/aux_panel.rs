//! AI diagnosis side panel of the detail view

use autobot_core::Insight;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{icons::IconSet, palette, styles};

/// Insights listed under "Recent Insights"
const MAX_RECENT_INSIGHTS: usize = 2;

const QUICK_ACTIONS: [&str; 3] = [
    "Diagnose ERPUpdateBot failures",
    "Generate performance report",
    "Suggest optimizations",
];

pub struct AuxPanel<'a> {
    bot_count: usize,
    cluster_count: usize,
    insights: &'a [&'a Insight],
    icons: IconSet,
}

impl<'a> AuxPanel<'a> {
    pub fn new(
        bot_count: usize,
        cluster_count: usize,
        insights: &'a [&'a Insight],
        icons: IconSet,
    ) -> Self {
        Self {
            bot_count,
            cluster_count,
            insights,
            icons,
        }
    }
}

impl Widget for AuxPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(Span::styled(
                format!(" {} AI Diagnosis ", self.icons.sparkles()),
                styles::accent(),
            ))
            .style(Style::default().bg(palette::POPUP_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(Span::styled(
                format!(
                    "I've analyzed {} bots and identified {} issue clusters.",
                    self.bot_count, self.cluster_count
                ),
                styles::text_secondary(),
            )),
            Line::default(),
            Line::from(Span::styled("Quick Actions", styles::heading())),
        ];

        lines.extend(QUICK_ACTIONS.iter().map(|action| {
            Line::from(vec![
                Span::styled(format!(" {} ", self.icons.chevron_right()), styles::accent()),
                Span::styled(*action, styles::text_primary()),
            ])
        }));

        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Recent Insights", styles::heading())));

        if self.insights.is_empty() {
            lines.push(Line::from(Span::styled(
                " No insights yet.",
                styles::text_muted(),
            )));
        }
        for insight in self.insights.iter().take(MAX_RECENT_INSIGHTS) {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {} ", self.icons.sparkles()),
                    styles::insight_kind(insight.kind),
                ),
                Span::styled(insight.title.clone(), styles::text_primary()),
            ]));
            lines.push(Line::from(Span::styled(
                format!("   {}", insight.description),
                styles::text_muted(),
            )));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
