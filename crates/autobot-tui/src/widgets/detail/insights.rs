//! AI insight list
//!
//! Shown on the detail AI Insights sub-tab and, fleet-wide, on the Insights
//! nav tab.

use autobot_core::Insight;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::section_block;
use crate::theme::{icons::IconSet, styles};

pub struct InsightList<'a> {
    title: &'a str,
    insights: &'a [&'a Insight],
    icons: IconSet,
}

impl<'a> InsightList<'a> {
    pub fn new(title: &'a str, insights: &'a [&'a Insight], icons: IconSet) -> Self {
        Self {
            title,
            insights,
            icons,
        }
    }

    fn insight_lines(&self, insight: &Insight) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    format!(" {} {}", self.icons.sparkles(), insight.kind.label()),
                    styles::insight_kind(insight.kind),
                ),
                Span::styled(
                    format!("  {}", insight.severity),
                    styles::insight_severity(insight.severity),
                ),
                Span::styled(
                    format!("  {}% confidence", insight.confidence),
                    styles::text_muted(),
                ),
            ]),
            Line::from(Span::styled(format!("   {}", insight.title), styles::heading())),
            Line::from(Span::styled(
                format!("   {}", insight.description),
                styles::text_secondary(),
            )),
            Line::from(vec![
                Span::styled("   Evidence: ", styles::text_muted()),
                Span::styled(insight.evidence.clone(), styles::text_secondary()),
            ]),
        ];

        lines.extend(insight.proposed_steps.iter().enumerate().map(|(i, step)| {
            Line::from(vec![
                Span::styled(format!("     {}. ", i + 1), styles::accent()),
                Span::styled(step.clone(), styles::text_primary()),
            ])
        }));
        lines.push(Line::default());
        lines
    }
}

impl Widget for InsightList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = section_block(self.title);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.insights.is_empty() {
            Paragraph::new(" No insights available.")
                .style(styles::text_muted())
                .render(inner, buf);
            return;
        }

        let lines: Vec<Line> = self
            .insights
            .iter()
            .flat_map(|insight| self.insight_lines(insight))
            .collect();

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
