//! Settings nav tab: effective configuration and report source

use std::path::Path;

use autobot_app::config::Settings;
use autobot_core::ReportSnapshot;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{icons::IconSet, styles};

pub struct SettingsView<'a> {
    settings: &'a Settings,
    report_source: &'a str,
    report: &'a ReportSnapshot,
    log_file: &'a Path,
    icons: IconSet,
}

impl<'a> SettingsView<'a> {
    pub fn new(
        settings: &'a Settings,
        report_source: &'a str,
        report: &'a ReportSnapshot,
        log_file: &'a Path,
        icons: IconSet,
    ) -> Self {
        Self {
            settings,
            report_source,
            report,
            log_file,
            icons,
        }
    }
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(format!(" {}", title), styles::heading()))
}

fn row(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("   {:<18}", label), styles::text_muted()),
        Span::styled(value, styles::text_primary()),
    ])
}

impl Widget for SettingsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(Span::styled(
            format!(" {} Settings ", self.icons.settings()),
            styles::heading(),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        let r = self.report;
        let lines = vec![
            section("Interface"),
            row("Icons", self.settings.ui.icons.to_string()),
            row(
                "Start tab",
                self.settings.ui.default_nav_tab.label().to_string(),
            ),
            row(
                "Confirm quit",
                if self.settings.behavior.confirm_quit {
                    "yes".to_string()
                } else {
                    "no".to_string()
                },
            ),
            Line::default(),
            section("Report"),
            row("Source", self.report_source.to_string()),
            row(
                "Contents",
                format!(
                    "{} areas, {} bots, {} runs, {} issues, {} insights, {} fixes",
                    r.areas.len(),
                    r.bots.len(),
                    r.runs.len(),
                    r.issues.len(),
                    r.insights.len(),
                    r.fixes.len()
                ),
            ),
            row("Last sync", r.summary.last_sync.clone()),
            Line::default(),
            section("Logging"),
            row("Log file", self.log_file.display().to_string()),
            Line::from(Span::styled(
                "   Set AUTOBOT_LOG to change the log filter (e.g. AUTOBOT_LOG=debug)",
                styles::text_muted(),
            )),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
