//! Main update function - handles state transitions (TEA pattern)

use std::sync::Arc;

use tracing::debug;

use crate::dashboard::NavTab;
use crate::detail::DetailTab;
use crate::message::Message;
use crate::state::AppState;

use super::{keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.force_quit();
            UpdateResult::none()
        }

        Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        // No animations; tick only keeps the loop responsive
        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Dashboard Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectNavTab(tab) => {
            state.dashboard.select_nav_tab(tab);
            UpdateResult::none()
        }

        Message::NextNavTab => {
            state.dashboard.next_nav_tab();
            UpdateResult::none()
        }

        Message::PreviousNavTab => {
            state.dashboard.previous_nav_tab();
            UpdateResult::none()
        }

        Message::SelectArea(area_id) => {
            let report = Arc::clone(&state.report);
            state.dashboard.select_area(&report, &area_id);
            UpdateResult::none()
        }

        Message::MoveAreaCursor(delta) => {
            if state.dashboard.active_nav_tab() == NavTab::Automations {
                let len = state.report.areas.len();
                state.dashboard.move_area_cursor(delta, len);
            }
            UpdateResult::none()
        }

        Message::SelectAreaAtCursor => {
            if state.dashboard.active_nav_tab() == NavTab::Automations {
                let report = Arc::clone(&state.report);
                state.dashboard.select_area_at_cursor(&report);
            } else {
                debug!("Ignoring area selection off the Automations tab");
            }
            UpdateResult::none()
        }

        Message::Back => {
            state.dashboard.go_back();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Detail Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectDetailTab(tab) => {
            if let Some(detail) = state.dashboard.detail_mut() {
                detail.select_tab(tab);
            }
            UpdateResult::none()
        }

        Message::NextDetailTab => {
            if let Some(detail) = state.dashboard.detail_mut() {
                detail.next_tab();
            }
            UpdateResult::none()
        }

        Message::PreviousDetailTab => {
            if let Some(detail) = state.dashboard.detail_mut() {
                detail.previous_tab();
            }
            UpdateResult::none()
        }

        Message::MoveDetailCursor(delta) => {
            let Some(tab) = state.detail().map(|d| d.active_tab()) else {
                return UpdateResult::none();
            };
            let len = match tab {
                DetailTab::Overview | DetailTab::Bots => state.area_bots().len(),
                DetailTab::FixOptimize => state.area_fixes().len(),
                _ => 0,
            };
            if let Some(detail) = state.dashboard.detail_mut() {
                detail.move_cursor(delta, len);
            }
            UpdateResult::none()
        }

        Message::OpenBotDetail(bot_id) => {
            let Some(area_id) = state.dashboard.selected_area_id() else {
                return UpdateResult::none();
            };
            if state.report.bot_in_area(area_id, &bot_id).is_none() {
                debug!("Ignoring unknown bot {} in area {}", bot_id, area_id);
                return UpdateResult::none();
            }
            if let Some(detail) = state.dashboard.detail_mut() {
                detail.open_bot_detail(bot_id);
            }
            UpdateResult::none()
        }

        Message::OpenBotAtCursor => {
            let cursor = state.detail().map_or(0, |d| d.bot_cursor());
            match state.area_bots().get(cursor) {
                Some(bot) => UpdateResult::message(Message::OpenBotDetail(bot.id.clone())),
                None => UpdateResult::none(),
            }
        }

        Message::CloseBotDetail => {
            if let Some(detail) = state.dashboard.detail_mut() {
                detail.close_bot_detail();
            }
            UpdateResult::none()
        }

        Message::ToggleAuxPanel => {
            if let Some(detail) = state.dashboard.detail_mut() {
                detail.toggle_aux_panel();
            }
            UpdateResult::none()
        }

        Message::ApplyFix(fix_id) => {
            let Some(area_id) = state.dashboard.selected_area_id() else {
                return UpdateResult::none();
            };
            if state.report.fix_in_area(area_id, &fix_id).is_none() {
                debug!("Ignoring unknown fix {} in area {}", fix_id, area_id);
                return UpdateResult::none();
            }
            if let Some(detail) = state.dashboard.detail_mut() {
                detail.apply_fix(fix_id);
            }
            UpdateResult::none()
        }

        Message::ApplyFixAtCursor => {
            let cursor = state.detail().map_or(0, |d| d.fix_cursor());
            match state.area_fixes().get(cursor) {
                Some(fix) => UpdateResult::message(Message::ApplyFix(fix.id.clone())),
                None => UpdateResult::none(),
            }
        }
    }
}
