//! Issue cluster list
//!
//! Shown on the detail Issues sub-tab and, fleet-wide, on the Issues nav tab.

use autobot_core::IssueCluster;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::section_block;
use crate::theme::{icons::IconSet, styles};

pub struct IssueList<'a> {
    title: &'a str,
    issues: &'a [&'a IssueCluster],
    icons: IconSet,
}

impl<'a> IssueList<'a> {
    pub fn new(title: &'a str, issues: &'a [&'a IssueCluster], icons: IconSet) -> Self {
        Self {
            title,
            issues,
            icons,
        }
    }

    fn issue_lines(&self, issue: &IssueCluster) -> Vec<Line<'static>> {
        let severity_style = styles::issue_severity(issue.severity);
        vec![
            Line::from(vec![
                Span::styled(format!(" {} ", self.icons.alert()), severity_style),
                Span::styled(issue.severity.label(), severity_style),
                Span::raw("  "),
                Span::styled(issue.title.clone(), styles::heading()),
            ]),
            Line::from(vec![
                Span::styled(
                    format!("   {} failures", issue.failure_count),
                    styles::text_secondary(),
                ),
                Span::styled(
                    format!("  {} {}", self.icons.clock(), issue.time_window),
                    styles::text_muted(),
                ),
            ]),
            Line::from(vec![
                Span::styled("   Impacted: ", styles::text_muted()),
                Span::styled(issue.impacted_bots.join(", "), styles::accent()),
            ]),
            Line::from(Span::styled(
                format!("   {}", issue.explanation),
                styles::text_secondary(),
            )),
            Line::default(),
        ]
    }
}

impl Widget for IssueList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = section_block(self.title);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.issues.is_empty() {
            Paragraph::new(" No issue clusters detected.")
                .style(styles::text_muted())
                .render(inner, buf);
            return;
        }

        let lines: Vec<Line> = self
            .issues
            .iter()
            .flat_map(|issue| self.issue_lines(issue))
            .collect();

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use autobot_app::config::IconMode;
    use autobot_core::fixture;

    #[test]
    fn test_issue_list_renders_clusters() {
        let report = fixture::builtin();
        let issues: Vec<&IssueCluster> = report.issues.iter().collect();

        let mut term = TestTerminal::wide();
        term.render_widget(
            IssueList::new("Issue Clusters", &issues, IconSet::new(IconMode::Unicode)),
            term.area(),
        );

        assert!(term.buffer_contains("Issue Clusters"));
        assert!(term.buffer_contains("SAP Latency"));
        assert!(term.buffer_contains("Impacted: ERPUpdateBot, ReprocessFailedOrdersBot"));
        assert!(term.buffer_contains("Vendor Data Quality"));
        assert!(term.buffer_contains("Retry Threshold Reached"));
    }

    #[test]
    fn test_issue_list_empty() {
        let mut term = TestTerminal::new();
        term.render_widget(
            IssueList::new("Issue Clusters", &[], IconSet::new(IconMode::Unicode)),
            term.area(),
        );
        assert!(term.buffer_contains("No issue clusters detected."));
    }
}
