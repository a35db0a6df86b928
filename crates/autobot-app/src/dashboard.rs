//! Top-level navigation: nav bar tabs and functional area selection
//!
//! The dashboard owns at most one [`DetailShell`]. Holding it as an `Option`
//! makes "an area is selected" and "the detail view is mounted" the same fact.

use autobot_core::{AreaId, FunctionalArea, ReportSnapshot};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::detail::DetailShell;

/// Top-level navigation tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavTab {
    #[default]
    Automations,
    Issues,
    Insights,
    Settings,
}

impl NavTab {
    pub const ALL: [NavTab; 4] = [
        NavTab::Automations,
        NavTab::Issues,
        NavTab::Insights,
        NavTab::Settings,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            NavTab::Automations => "automations",
            NavTab::Issues => "issues",
            NavTab::Insights => "insights",
            NavTab::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavTab::Automations => "Automations",
            NavTab::Issues => "Issues",
            NavTab::Insights => "Insights",
            NavTab::Settings => "Settings",
        }
    }

    /// Parse a tab id; unknown ids yield `None`
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.id() == id)
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

/// Session state of the dashboard screen
#[derive(Debug, Clone, Default)]
pub struct DashboardShell {
    active_nav_tab: NavTab,
    detail: Option<DetailShell>,
    /// Highlighted row in the area list
    area_cursor: usize,
}

impl DashboardShell {
    pub fn new(nav_tab: NavTab) -> Self {
        Self {
            active_nav_tab: nav_tab,
            ..Default::default()
        }
    }

    pub fn active_nav_tab(&self) -> NavTab {
        self.active_nav_tab
    }

    pub fn area_cursor(&self) -> usize {
        self.area_cursor
    }

    /// Id of the selected area, present exactly when a detail session exists
    pub fn selected_area_id(&self) -> Option<&AreaId> {
        self.detail.as_ref().map(|detail| detail.area_id())
    }

    pub fn selected_area<'a>(&self, report: &'a ReportSnapshot) -> Option<&'a FunctionalArea> {
        self.selected_area_id().and_then(|id| report.area(id))
    }

    pub fn detail(&self) -> Option<&DetailShell> {
        self.detail.as_ref()
    }

    pub fn detail_mut(&mut self) -> Option<&mut DetailShell> {
        self.detail.as_mut()
    }

    /// Switch nav tab. Always returns to the area grid.
    pub fn select_nav_tab(&mut self, tab: NavTab) {
        debug!("Nav tab {} (detail open: {})", tab.id(), self.detail.is_some());
        self.active_nav_tab = tab;
        self.detail = None;
    }

    /// Switch nav tab by id. An unknown id keeps the current tab but still
    /// returns to the grid.
    pub fn select_nav_tab_id(&mut self, id: &str) {
        match NavTab::parse(id) {
            Some(tab) => self.select_nav_tab(tab),
            None => {
                debug!("Unknown nav tab id {:?}", id);
                self.detail = None;
            }
        }
    }

    pub fn next_nav_tab(&mut self) {
        self.select_nav_tab(self.active_nav_tab.next());
    }

    pub fn previous_nav_tab(&mut self) {
        self.select_nav_tab(self.active_nav_tab.previous());
    }

    /// Open a fresh detail session for `area_id`.
    ///
    /// Unknown ids leave the dashboard untouched and return `false`.
    pub fn select_area(&mut self, report: &ReportSnapshot, area_id: &AreaId) -> bool {
        let Some(index) = report.areas.iter().position(|area| &area.id == area_id) else {
            debug!("Ignoring selection of unknown area {}", area_id);
            return false;
        };

        info!("Selected area {} ({})", area_id, report.areas[index].title);
        self.area_cursor = index;
        self.detail = Some(DetailShell::new(area_id.clone()));
        true
    }

    /// Open the area under the cursor
    pub fn select_area_at_cursor(&mut self, report: &ReportSnapshot) -> bool {
        match report.areas.get(self.area_cursor) {
            Some(area) => {
                let id = area.id.clone();
                self.select_area(report, &id)
            }
            None => false,
        }
    }

    /// Drop the detail session and return to the grid
    pub fn go_back(&mut self) {
        if let Some(detail) = self.detail.take() {
            debug!("Leaving detail view for area {}", detail.area_id());
        }
    }

    /// Move the area cursor by `delta`, clamped to `0..len`
    pub fn move_area_cursor(&mut self, delta: isize, len: usize) {
        self.area_cursor = clamp_cursor(self.area_cursor, delta, len);
    }
}

/// Shift a list cursor by `delta`, clamped to the list bounds
pub(crate) fn clamp_cursor(cursor: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let max = len - 1;
    cursor.saturating_add_signed(delta).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::DetailTab;
    use autobot_core::{fixture, BotId, FixId};

    #[test]
    fn test_nav_tab_parse_known_and_unknown() {
        assert_eq!(NavTab::parse("issues"), Some(NavTab::Issues));
        assert_eq!(NavTab::parse("settings"), Some(NavTab::Settings));
        assert_eq!(NavTab::parse("reports"), None);
    }

    #[test]
    fn test_nav_tab_cycles() {
        assert_eq!(NavTab::Automations.next(), NavTab::Issues);
        assert_eq!(NavTab::Settings.next(), NavTab::Automations);
        assert_eq!(NavTab::Automations.previous(), NavTab::Settings);
    }

    #[test]
    fn test_every_nav_tab_clears_selection() {
        let report = fixture::builtin();
        for tab in NavTab::ALL {
            let mut dashboard = DashboardShell::default();
            assert!(dashboard.select_area(&report, &AreaId::from("3")));
            dashboard.select_nav_tab(tab);
            assert_eq!(dashboard.active_nav_tab(), tab);
            assert!(dashboard.selected_area_id().is_none());
            assert!(dashboard.detail().is_none());
        }
    }

    #[test]
    fn test_unknown_nav_tab_id_still_returns_to_grid() {
        let report = fixture::builtin();
        let mut dashboard = DashboardShell::new(NavTab::Issues);
        dashboard.select_area(&report, &AreaId::from("1"));

        dashboard.select_nav_tab_id("reports");
        assert_eq!(dashboard.active_nav_tab(), NavTab::Issues);
        assert!(dashboard.selected_area_id().is_none());

        dashboard.select_nav_tab_id("insights");
        assert_eq!(dashboard.active_nav_tab(), NavTab::Insights);
    }

    #[test]
    fn test_select_area_mounts_fresh_detail() {
        let report = fixture::builtin();
        let mut dashboard = DashboardShell::default();

        dashboard.select_area(&report, &AreaId::from("1"));
        {
            let detail = dashboard.detail_mut().unwrap();
            detail.select_tab(DetailTab::FixOptimize);
            detail.open_bot_detail(BotId::from("3"));
            detail.toggle_aux_panel();
            detail.apply_fix(FixId::from("1"));
        }

        dashboard.select_area(&report, &AreaId::from("2"));
        let detail = dashboard.detail().unwrap();
        assert_eq!(detail.area_id(), &AreaId::from("2"));
        assert_eq!(detail.active_tab(), DetailTab::Overview);
        assert!(detail.selected_bot().is_none());
        assert!(!detail.aux_panel_open());
        assert!(detail.applied_fixes().is_empty());
    }

    #[test]
    fn test_select_unknown_area_is_noop() {
        let report = fixture::builtin();
        let mut dashboard = DashboardShell::default();
        assert!(!dashboard.select_area(&report, &AreaId::from("42")));
        assert!(dashboard.selected_area_id().is_none());

        dashboard.select_area(&report, &AreaId::from("4"));
        assert!(!dashboard.select_area(&report, &AreaId::from("42")));
        assert_eq!(dashboard.selected_area_id(), Some(&AreaId::from("4")));
    }

    #[test]
    fn test_go_back_clears_selection() {
        let report = fixture::builtin();
        let mut dashboard = DashboardShell::default();
        dashboard.select_area(&report, &AreaId::from("2"));
        dashboard.go_back();
        assert!(dashboard.selected_area_id().is_none());
        // Going back from the grid is harmless
        dashboard.go_back();
        assert!(dashboard.detail().is_none());
    }

    #[test]
    fn test_area_cursor_clamps_and_selects() {
        let report = fixture::builtin();
        let mut dashboard = DashboardShell::default();
        let len = report.areas.len();

        dashboard.move_area_cursor(-1, len);
        assert_eq!(dashboard.area_cursor(), 0);
        dashboard.move_area_cursor(10, len);
        assert_eq!(dashboard.area_cursor(), len - 1);

        assert!(dashboard.select_area_at_cursor(&report));
        assert_eq!(
            dashboard.selected_area(&report).map(|a| a.title.as_str()),
            Some("Finance Reconciliations")
        );
    }

    #[test]
    fn test_clamp_cursor_empty_list() {
        assert_eq!(clamp_cursor(3, 1, 0), 0);
        assert_eq!(clamp_cursor(0, -1, 5), 0);
        assert_eq!(clamp_cursor(2, 1, 5), 3);
    }
}
