//! Application state (Model in TEA pattern)

use std::sync::Arc;

use autobot_core::prelude::*;
use autobot_core::{Bot, ReportProvider, ReportSnapshot, SuggestedFix};

use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::dashboard::DashboardShell;
use crate::detail::DetailShell;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Dashboard or detail view
    #[default]
    Normal,

    /// Confirmation dialog (e.g., quit confirmation)
    ConfirmDialog,
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    /// Current application phase
    pub phase: AppPhase,

    /// Current UI mode
    pub ui_mode: UiMode,

    /// Application settings from config file
    pub settings: Settings,

    /// Reporting snapshot loaded at start-up
    pub report: Arc<ReportSnapshot>,

    /// Where the snapshot came from, for the settings view
    pub report_source: String,

    /// Dashboard session (nav tab, selected area, detail session)
    pub dashboard: DashboardShell,

    /// Confirm dialog contents while `ui_mode` is `ConfirmDialog`
    pub confirm_dialog_state: Option<ConfirmDialogState>,
}

impl AppState {
    pub fn new(report: ReportSnapshot, settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            ui_mode: UiMode::Normal,
            dashboard: DashboardShell::new(settings.ui.default_nav_tab),
            settings,
            report: Arc::new(report),
            report_source: "built-in fixture".to_string(),
            confirm_dialog_state: None,
        }
    }

    /// Load the snapshot through `provider` and build the initial state
    pub fn from_provider(provider: &dyn ReportProvider, settings: Settings) -> Result<Self> {
        let report = provider.load()?;
        let source = provider.describe();
        info!(
            "Loaded report from {}: {} areas, {} bots",
            source,
            report.areas.len(),
            report.bots.len()
        );

        let mut state = Self::new(report, settings);
        state.report_source = source;
        Ok(state)
    }

    // ─────────────────────────────────────────────────────────
    // Selection Helpers
    // ─────────────────────────────────────────────────────────

    pub fn detail(&self) -> Option<&DetailShell> {
        self.dashboard.detail()
    }

    /// Bots listed under the selected area
    pub fn area_bots(&self) -> Vec<&Bot> {
        match self.dashboard.selected_area_id() {
            Some(area) => self.report.bots_for(area).collect(),
            None => Vec::new(),
        }
    }

    /// Fixes listed under the selected area
    pub fn area_fixes(&self) -> Vec<&SuggestedFix> {
        match self.dashboard.selected_area_id() {
            Some(area) => self.report.fixes_for(area).collect(),
            None => Vec::new(),
        }
    }

    /// The bot shown in the bot modal, if any
    pub fn selected_bot(&self) -> Option<&Bot> {
        let detail = self.detail()?;
        let bot = detail.selected_bot()?;
        self.report.bot_in_area(detail.area_id(), bot)
    }

    // ─────────────────────────────────────────────────────────
    // Quit Flow
    // ─────────────────────────────────────────────────────────

    /// Request quit, showing a confirmation dialog when configured
    pub fn request_quit(&mut self) {
        if self.settings.behavior.confirm_quit {
            let applied = self.detail().map_or(0, |d| d.applied_fixes().len());
            self.confirm_dialog_state = Some(ConfirmDialogState::quit_confirmation(applied));
            self.ui_mode = UiMode::ConfirmDialog;
        } else {
            self.phase = AppPhase::Quitting;
        }
    }

    /// Force quit without confirmation
    pub fn force_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Confirm quit (from confirmation dialog)
    pub fn confirm_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Cancel quit (from confirmation dialog)
    pub fn cancel_quit(&mut self) {
        self.confirm_dialog_state = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
