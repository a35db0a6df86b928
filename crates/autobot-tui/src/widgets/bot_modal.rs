//! Bot detail modal
//!
//! Metadata, recent failed runs and a canned diagnosis for one bot, drawn
//! over a dimmed detail view.

use autobot_core::{bot_diagnosis, Bot, RunHistoryEntry, SuccessBand};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::modal_overlay;
use crate::theme::{icons::IconSet, styles};

const MODAL_WIDTH: u16 = 68;
const MODAL_HEIGHT: u16 = 20;

/// Failed runs listed under "Recent Errors"
const MAX_ERRORS: usize = 5;

pub struct BotModal<'a> {
    bot: &'a Bot,
    errors: &'a [&'a RunHistoryEntry],
    icons: IconSet,
}

impl<'a> BotModal<'a> {
    pub fn new(bot: &'a Bot, errors: &'a [&'a RunHistoryEntry], icons: IconSet) -> Self {
        Self { bot, errors, icons }
    }

    fn metadata_lines(&self) -> Vec<Line<'static>> {
        let (status_label, status_style) = styles::bot_status(self.bot.status);
        let field = |label: &str, value: Span<'static>| {
            Line::from(vec![
                Span::styled(format!("   {:<14}", label), styles::text_muted()),
                value,
            ])
        };

        vec![
            Line::from(Span::styled(" Bot Metadata", styles::heading())),
            field(
                "Bot ID",
                Span::styled(self.bot.id.to_string(), styles::text_primary()),
            ),
            field(
                "Status",
                Span::styled(format!("{} {}", self.icons.dot(), status_label), status_style),
            ),
            field(
                "Last Run",
                Span::styled(self.bot.last_run.clone(), styles::text_primary()),
            ),
            field(
                "Success Rate",
                Span::styled(
                    format!("{}%", self.bot.success_rate),
                    styles::success_band(SuccessBand::from_percent(self.bot.success_rate)),
                ),
            ),
        ]
    }

    fn error_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(" Recent Errors", styles::heading()))];
        if self.errors.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("   {} No errors in the last 7 days", self.icons.check()),
                styles::success_band(SuccessBand::Good),
            )));
            return lines;
        }

        lines.extend(self.errors.iter().take(MAX_ERRORS).map(|run| {
            Line::from(vec![
                Span::styled(format!("   {} ", self.icons.close()), styles::run_outcome(&run.outcome)),
                Span::styled(format!("{}  ", run.timestamp), styles::text_muted()),
                Span::styled(
                    run.outcome.error().unwrap_or_default().to_string(),
                    styles::text_secondary(),
                ),
            ])
        }));
        lines
    }
}

impl Widget for BotModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = modal_overlay::prepare_modal(buf, area, MODAL_WIDTH, MODAL_HEIGHT);

        let title = format!(" {} {} ", self.icons.bot(), self.bot.name);
        let block = styles::modal_block(&title);
        let inner = block.inner(modal);
        block.render(modal, buf);

        let error_rows = self.errors.len().clamp(1, MAX_ERRORS) as u16 + 1;
        let rows = Layout::vertical([
            Constraint::Length(6),
            Constraint::Length(error_rows + 1),
            Constraint::Min(2),
            Constraint::Length(1),
        ])
        .split(inner);

        Paragraph::new(self.metadata_lines()).render(rows[0], buf);
        Paragraph::new(self.error_lines()).render(rows[1], buf);

        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(format!(" {} ", self.icons.sparkles()), styles::accent()),
                Span::styled("AI Diagnostics", styles::heading()),
            ]),
            Line::from(Span::styled(
                format!("   {}", bot_diagnosis(self.bot.status)),
                styles::text_secondary(),
            )),
        ])
        .wrap(Wrap { trim: false })
        .render(rows[2], buf);

        Paragraph::new(Line::from(vec![
            Span::styled(" [Esc] ", styles::keybinding()),
            Span::styled("Close", styles::text_muted()),
        ]))
        .render(rows[3], buf);
    }
}
