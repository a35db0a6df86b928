//! Main render/view function (View in TEA pattern)


use autobot_app::state::{AppState, UiMode};
use autobot_app::{DetailShell, DetailTab, NavTab};
use autobot_core::{logging, overall_area_status, Bot, Insight, IssueCluster, RunHistoryEntry};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette, styles};

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`; everything shown is derived from the
/// snapshot and the navigation state on every frame.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);

    frame.render_widget(
        widgets::MainHeader::new(icons, state.dashboard.active_nav_tab()),
        areas.header,
    );

    let footer_context = match (state.ui_mode, state.detail()) {
        (UiMode::ConfirmDialog, _) => widgets::FooterContext::Confirm,
        (UiMode::Normal, Some(detail)) if detail.selected_bot().is_some() => {
            widgets::FooterContext::BotModal
        }
        (UiMode::Normal, Some(detail)) => widgets::FooterContext::Detail(detail.active_tab()),
        (UiMode::Normal, None) => {
            widgets::FooterContext::Dashboard(state.dashboard.active_nav_tab())
        }
    };
    frame.render_widget(widgets::Footer::new(footer_context), areas.footer);

    match state.detail() {
        Some(detail) => render_detail(frame, state, detail, areas.body, icons),
        None => render_nav_tab(frame, state, areas.body, icons),
    }

    if state.ui_mode == UiMode::ConfirmDialog {
        if let Some(ref dialog_state) = state.confirm_dialog_state {
            frame.render_widget(widgets::ConfirmDialog::new(dialog_state), area);
        }
    }
}

/// Body of the dashboard when no area is selected
fn render_nav_tab(frame: &mut Frame, state: &AppState, area: Rect, icons: IconSet) {
    let report = &state.report;
    match state.dashboard.active_nav_tab() {
        NavTab::Automations => {
            frame.render_widget(
                widgets::AreaGrid::new(&report.areas, state.dashboard.area_cursor(), icons),
                area,
            );
        }
        NavTab::Issues => {
            let issues: Vec<&IssueCluster> = report.issues.iter().collect();
            frame.render_widget(
                widgets::IssueList::new("All Issue Clusters", &issues, icons),
                area,
            );
        }
        NavTab::Insights => {
            let insights: Vec<&Insight> = report.insights.iter().collect();
            frame.render_widget(
                widgets::InsightList::new("All AI Insights", &insights, icons),
                area,
            );
        }
        NavTab::Settings => {
            let log_file = logging::get_current_log_file();
            frame.render_widget(
                widgets::SettingsView::new(
                    &state.settings,
                    &state.report_source,
                    report,
                    &log_file,
                    icons,
                ),
                area,
            );
        }
    }
}

/// Detail view of the selected area, with its side panel and bot modal
fn render_detail(
    frame: &mut Frame,
    state: &AppState,
    detail: &DetailShell,
    area: Rect,
    icons: IconSet,
) {
    let report = &state.report;
    let area_id = detail.area_id();

    let Some(functional_area) = report.area(area_id) else {
        // Selection is validated on entry, so this only shows on a bad snapshot
        frame.render_widget(
            Paragraph::new(format!(" Unknown area {}", area_id)).style(styles::text_muted()),
            area,
        );
        return;
    };

    let bots: Vec<&Bot> = state.area_bots();
    let insights: Vec<&Insight> = report.insights_for(area_id).collect();
    let issues: Vec<&IssueCluster> = report.issues_for(area_id).collect();

    let detail_areas = layout::detail(area, detail.aux_panel_open());

    frame.render_widget(
        widgets::DetailHeader::new(
            functional_area,
            overall_area_status(bots.iter().copied()),
            &report.summary.last_sync,
            detail.aux_panel_open(),
            icons,
        ),
        detail_areas.title,
    );
    frame.render_widget(
        widgets::DetailTabBar::new(detail.active_tab()),
        detail_areas.tabs,
    );

    let content = detail_areas.content;
    match detail.active_tab() {
        DetailTab::Overview => frame.render_widget(
            widgets::OverviewTab::new(
                &report.summary,
                &bots,
                &insights,
                detail.bot_cursor(),
                icons,
            ),
            content,
        ),
        DetailTab::Bots => frame.render_widget(
            widgets::BotsTable::new(&bots, detail.bot_cursor(), icons),
            content,
        ),
        DetailTab::History => {
            let runs: Vec<&RunHistoryEntry> = report.runs_for(area_id).collect();
            frame.render_widget(widgets::RunHistory::new(&report.analytics, &runs), content);
        }
        DetailTab::Issues => frame.render_widget(
            widgets::IssueList::new("Issue Clusters", &issues, icons),
            content,
        ),
        DetailTab::AiInsights => frame.render_widget(
            widgets::InsightList::new("AI Insights Engine", &insights, icons),
            content,
        ),
        DetailTab::FixOptimize => {
            let fixes = state.area_fixes();
            frame.render_widget(widgets::FixList::new(&fixes, detail, icons), content);
        }
    }

    if let Some(aux) = detail_areas.aux {
        frame.render_widget(
            widgets::AuxPanel::new(bots.len(), issues.len(), &insights, icons),
            aux,
        );
    }

    if let Some(bot) = state.selected_bot() {
        let errors: Vec<&RunHistoryEntry> = report.recent_errors(area_id, &bot.name).collect();
        frame.render_widget(widgets::BotModal::new(bot, &errors, icons), area);
    }
}
