//! Functional area card grid
//!
//! One card per area with its bot count, health badge and success-rate gauge.
//! The card under the dashboard cursor gets the active border.

use autobot_core::{FunctionalArea, SuccessBand};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, styles};

/// Card height: borders plus five content rows
const CARD_HEIGHT: u16 = 7;

/// Minimum width before the grid drops to a single column
const TWO_COLUMN_MIN_WIDTH: u16 = 64;

/// Grid of functional area cards
pub struct AreaGrid<'a> {
    areas: &'a [FunctionalArea],
    cursor: usize,
    icons: IconSet,
}

impl<'a> AreaGrid<'a> {
    pub fn new(areas: &'a [FunctionalArea], cursor: usize, icons: IconSet) -> Self {
        Self {
            areas,
            cursor,
            icons,
        }
    }

    fn columns(width: u16) -> u16 {
        if width >= TWO_COLUMN_MIN_WIDTH {
            2
        } else {
            1
        }
    }
}

impl Widget for AreaGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled("Automation Overview", styles::heading()),
            Span::styled(
                format!("  {} functional areas", self.areas.len()),
                styles::text_muted(),
            ),
        ]);
        buf.set_line(area.x, area.y, &title, area.width);

        let grid = Rect {
            y: area.y + 1,
            height: area.height.saturating_sub(1),
            ..area
        };

        if self.areas.is_empty() {
            Paragraph::new(" No functional areas in this report.")
                .style(styles::text_muted())
                .render(grid, buf);
            return;
        }

        let columns = Self::columns(grid.width) as usize;
        let card_width = grid.width / columns as u16;
        let visible_rows = (grid.height / CARD_HEIGHT).max(1) as usize;

        // Scroll so the cursor row stays visible
        let cursor_row = self.cursor / columns;
        let first_row = cursor_row.saturating_sub(visible_rows - 1);

        for (index, functional_area) in self.areas.iter().enumerate() {
            let row = index / columns;
            if row < first_row || row >= first_row + visible_rows {
                continue;
            }
            let col = (index % columns) as u16;
            let card = Rect {
                x: grid.x + col * card_width,
                y: grid.y + (row - first_row) as u16 * CARD_HEIGHT,
                width: card_width,
                height: CARD_HEIGHT.min(grid.height),
            };
            AreaCard {
                area: functional_area,
                focused: index == self.cursor,
                icons: self.icons,
            }
            .render(card, buf);
        }
    }
}

/// A single functional area card
struct AreaCard<'a> {
    area: &'a FunctionalArea,
    focused: bool,
    icons: IconSet,
}

impl Widget for AreaCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(Span::styled(
            format!(" {} ", self.area.title),
            if self.focused {
                styles::accent()
            } else {
                styles::heading()
            },
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 4 {
            return;
        }

        let (health_label, health_style) = styles::area_health(self.area.health);
        let rate = self.area.success_rate;
        let band = styles::success_band(SuccessBand::from_percent(rate));

        let lines = vec![
            Line::from(vec![
                Span::raw(" "),
                Span::styled(self.icons.bot(), styles::accent()),
                Span::styled(
                    format!(" {} bots active  ", self.area.active_bot_count),
                    styles::text_secondary(),
                ),
                Span::styled(format!("{} ", self.icons.dot()), health_style),
                Span::styled(health_label, health_style),
            ]),
            Line::from(vec![
                Span::styled(" Success Rate ", styles::text_muted()),
                Span::styled(format!("{}%", rate), band),
            ]),
            gauge_line(rate, inner.width.saturating_sub(2)),
            Line::from(vec![
                Span::styled(format!(" {} Last issue: ", self.icons.clock()), styles::text_muted()),
                Span::styled(self.area.last_issue.clone(), styles::text_secondary()),
            ]),
            Line::from(vec![Span::styled(
                format!(" View Details {}", self.icons.chevron_right()),
                if self.focused {
                    styles::focused_selected()
                } else {
                    styles::text_muted()
                },
            )]),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Horizontal bar gauge filled proportionally to `percent`
pub(crate) fn gauge_line(percent: u8, width: u16) -> Line<'static> {
    let percent = percent.min(100) as usize;
    let width = width as usize;
    let filled = width * percent / 100;
    Line::from(vec![
        Span::raw(" "),
        Span::styled(
            "█".repeat(filled),
            styles::success_band(SuccessBand::from_percent(percent as u8)),
        ),
        Span::styled("░".repeat(width - filled), styles::gauge_track()),
    ])
}
