//! Detail session for one functional area
//!
//! A fresh [`DetailShell`] is created every time an area is selected and
//! dropped on back navigation, so none of its state outlives the selection.

use std::collections::BTreeSet;

use autobot_core::{AreaId, BotId, FixId};
use tracing::{debug, info};

use crate::dashboard::clamp_cursor;

/// Sub-tab of the detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DetailTab {
    #[default]
    Overview,
    Bots,
    History,
    Issues,
    AiInsights,
    FixOptimize,
}

impl DetailTab {
    pub const ALL: [DetailTab; 6] = [
        DetailTab::Overview,
        DetailTab::Bots,
        DetailTab::History,
        DetailTab::Issues,
        DetailTab::AiInsights,
        DetailTab::FixOptimize,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            DetailTab::Overview => "overview",
            DetailTab::Bots => "bots",
            DetailTab::History => "history",
            DetailTab::Issues => "issues",
            DetailTab::AiInsights => "ai-insights",
            DetailTab::FixOptimize => "fix-optimize",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DetailTab::Overview => "Overview",
            DetailTab::Bots => "Bots",
            DetailTab::History => "History",
            DetailTab::Issues => "Issues",
            DetailTab::AiInsights => "AI Insights",
            DetailTab::FixOptimize => "Fix & Optimize",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.id() == id)
    }

    /// Tab for a 1-based number key
    pub fn from_number(n: usize) -> Option<Self> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|tab| tab == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Lifecycle of a suggested fix within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixState {
    Proposed,
    /// Terminal; there is no revert
    Applied,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailShell {
    area_id: AreaId,
    active_tab: DetailTab,
    selected_bot: Option<BotId>,
    aux_panel_open: bool,
    applied_fixes: BTreeSet<FixId>,
    bot_cursor: usize,
    fix_cursor: usize,
}

impl DetailShell {
    pub fn new(area_id: AreaId) -> Self {
        Self {
            area_id,
            active_tab: DetailTab::default(),
            selected_bot: None,
            aux_panel_open: false,
            applied_fixes: BTreeSet::new(),
            bot_cursor: 0,
            fix_cursor: 0,
        }
    }

    pub fn area_id(&self) -> &AreaId {
        &self.area_id
    }

    pub fn active_tab(&self) -> DetailTab {
        self.active_tab
    }

    pub fn selected_bot(&self) -> Option<&BotId> {
        self.selected_bot.as_ref()
    }

    pub fn aux_panel_open(&self) -> bool {
        self.aux_panel_open
    }

    pub fn applied_fixes(&self) -> &BTreeSet<FixId> {
        &self.applied_fixes
    }

    pub fn bot_cursor(&self) -> usize {
        self.bot_cursor
    }

    pub fn fix_cursor(&self) -> usize {
        self.fix_cursor
    }

    pub fn select_tab(&mut self, tab: DetailTab) {
        debug!("Area {}: tab {}", self.area_id, tab.id());
        self.active_tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.active_tab.next());
    }

    pub fn previous_tab(&mut self) {
        self.select_tab(self.active_tab.previous());
    }

    /// Open the bot modal. Replaces any bot already shown.
    pub fn open_bot_detail(&mut self, bot: BotId) {
        debug!("Area {}: open bot {}", self.area_id, bot);
        self.selected_bot = Some(bot);
    }

    pub fn close_bot_detail(&mut self) {
        self.selected_bot = None;
    }

    pub fn toggle_aux_panel(&mut self) {
        self.aux_panel_open = !self.aux_panel_open;
        debug!("Area {}: aux panel open = {}", self.area_id, self.aux_panel_open);
    }

    /// Mark a fix applied. Returns `false` if it already was.
    pub fn apply_fix(&mut self, fix: FixId) -> bool {
        if self.applied_fixes.contains(&fix) {
            return false;
        }
        info!("Area {}: applied fix {}", self.area_id, fix);
        self.applied_fixes.insert(fix)
    }

    pub fn is_applied(&self, fix: &FixId) -> bool {
        self.applied_fixes.contains(fix)
    }

    pub fn fix_state(&self, fix: &FixId) -> FixState {
        if self.is_applied(fix) {
            FixState::Applied
        } else {
            FixState::Proposed
        }
    }

    /// Move the cursor of the active tab's list, if it has one
    pub fn move_cursor(&mut self, delta: isize, len: usize) {
        match self.active_tab {
            DetailTab::Bots | DetailTab::Overview => {
                self.bot_cursor = clamp_cursor(self.bot_cursor, delta, len);
            }
            DetailTab::FixOptimize => {
                self.fix_cursor = clamp_cursor(self.fix_cursor, delta, len);
            }
            DetailTab::History | DetailTab::Issues | DetailTab::AiInsights => {}
        }
    }
}
