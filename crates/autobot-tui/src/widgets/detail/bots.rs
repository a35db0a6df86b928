//! Bots sub-tab: per-bot metrics table

use autobot_core::{Bot, SuccessBand};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, Widget},
};

use super::section_block;
use crate::theme::{icons::IconSet, palette, styles};

pub struct BotsTable<'a> {
    bots: &'a [&'a Bot],
    cursor: usize,
    icons: IconSet,
}

impl<'a> BotsTable<'a> {
    pub fn new(bots: &'a [&'a Bot], cursor: usize, icons: IconSet) -> Self {
        Self {
            bots,
            cursor,
            icons,
        }
    }

    fn row(&self, index: usize, bot: &Bot) -> Row<'static> {
        let (status_label, status_style) = styles::bot_status(bot.status);
        let rate_style = styles::success_band(SuccessBand::from_percent(bot.success_rate));
        let failures_style = if bot.failures_7d > 0 {
            Style::default().fg(palette::STATUS_RED)
        } else {
            styles::text_muted()
        };

        let row = Row::new(vec![
            Cell::from(Line::from(vec![
                Span::styled(format!("{} ", self.icons.bot()), styles::accent()),
                Span::raw(bot.name.clone()),
            ])),
            Cell::from(Span::styled(
                format!("{} {}", self.icons.dot(), status_label),
                status_style,
            )),
            Cell::from(bot.last_run.clone()),
            Cell::from(Span::styled(format!("{}%", bot.success_rate), rate_style)),
            Cell::from(bot.avg_runtime.clone()),
            Cell::from(Span::styled(bot.failures_7d.to_string(), failures_style)),
        ]);

        if index == self.cursor {
            row.style(styles::focused_selected())
        } else {
            row.style(styles::text_secondary())
        }
    }
}

impl Widget for BotsTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = section_block("Bots Overview");
        let inner = block.inner(area);
        block.render(area, buf);

        if self.bots.is_empty() {
            Paragraph::new(" No bots in this area.")
                .style(styles::text_muted())
                .render(inner, buf);
            return;
        }

        // Keep the cursor row in view (one row for the header)
        let visible = inner.height.saturating_sub(1).max(1) as usize;
        let skip = self.cursor.saturating_sub(visible - 1);

        let header = Row::new(vec![
            "Bot Name",
            "Status",
            "Last Run",
            "Success",
            "Avg Runtime",
            "Failures (7d)",
        ])
        .style(styles::heading());

        let rows: Vec<Row> = self
            .bots
            .iter()
            .enumerate()
            .skip(skip)
            .map(|(index, bot)| self.row(index, bot))
            .collect();

        let widths = [
            Constraint::Min(24),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(12),
            Constraint::Length(13),
        ];

        Table::new(rows, widths)
            .header(header)
            .column_spacing(1)
            .render(inner, buf);
    }
}
