//! Reporting snapshot and the providers that supply it
//!
//! A [`ReportSnapshot`] is the complete, read-only data set the dashboard
//! renders. It is loaded once at start-up through a [`ReportProvider`] and
//! shared by reference afterwards.
//!
//! Records carry an optional `area_id`. `None` marks a fleet-wide record that
//! is listed under every area; `Some(id)` scopes it to one area.

use std::collections::HashSet;
use std::hash::Hash;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{
    AreaId, AutomationSummary, Bot, BotId, FixId, FunctionalArea, Insight, IssueCluster,
    RunAnalytics, RunHistoryEntry, SuggestedFix,
};

/// Complete set of reference data consumed by the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReportSnapshot {
    pub areas: Vec<FunctionalArea>,
    #[serde(default)]
    pub bots: Vec<Bot>,
    #[serde(default)]
    pub runs: Vec<RunHistoryEntry>,
    #[serde(default)]
    pub issues: Vec<IssueCluster>,
    #[serde(default)]
    pub insights: Vec<Insight>,
    #[serde(default)]
    pub fixes: Vec<SuggestedFix>,
    #[serde(default)]
    pub summary: AutomationSummary,
    #[serde(default)]
    pub analytics: RunAnalytics,
}

/// True when a record scoped by `scope` belongs to `area`
fn in_scope(scope: Option<&AreaId>, area: &AreaId) -> bool {
    scope.map_or(true, |id| id == area)
}

impl ReportSnapshot {
    pub fn area(&self, id: &AreaId) -> Option<&FunctionalArea> {
        self.areas.iter().find(|area| &area.id == id)
    }

    pub fn bots_for<'a>(&'a self, area: &AreaId) -> impl Iterator<Item = &'a Bot> + 'a {
        let area = area.clone();
        self.bots
            .iter()
            .filter(move |bot| in_scope(bot.area_id.as_ref(), &area))
    }

    pub fn runs_for<'a>(&'a self, area: &AreaId) -> impl Iterator<Item = &'a RunHistoryEntry> + 'a {
        let area = area.clone();
        self.runs
            .iter()
            .filter(move |run| in_scope(run.area_id.as_ref(), &area))
    }

    pub fn issues_for<'a>(&'a self, area: &AreaId) -> impl Iterator<Item = &'a IssueCluster> + 'a {
        let area = area.clone();
        self.issues
            .iter()
            .filter(move |issue| in_scope(issue.area_id.as_ref(), &area))
    }

    pub fn insights_for<'a>(&'a self, area: &AreaId) -> impl Iterator<Item = &'a Insight> + 'a {
        let area = area.clone();
        self.insights
            .iter()
            .filter(move |insight| in_scope(insight.area_id.as_ref(), &area))
    }

    pub fn fixes_for<'a>(&'a self, area: &AreaId) -> impl Iterator<Item = &'a SuggestedFix> + 'a {
        let area = area.clone();
        self.fixes
            .iter()
            .filter(move |fix| in_scope(fix.area_id.as_ref(), &area))
    }

    /// Look up a bot listed under `area`
    pub fn bot_in_area(&self, area: &AreaId, bot: &BotId) -> Option<&Bot> {
        self.bots_for(area).find(|b| &b.id == bot)
    }

    /// Look up a fix listed under `area`
    pub fn fix_in_area(&self, area: &AreaId, fix: &FixId) -> Option<&SuggestedFix> {
        self.fixes_for(area).find(|f| &f.id == fix)
    }

    /// Failed runs of a bot within an area, newest first.
    ///
    /// Run history is stored newest first, so fixture order is kept.
    pub fn recent_errors<'a>(
        &'a self,
        area: &AreaId,
        bot_name: &str,
    ) -> impl Iterator<Item = &'a RunHistoryEntry> + 'a {
        let bot_name = bot_name.to_string();
        self.runs_for(area)
            .filter(move |run| run.outcome.is_failure() && names_match(&run.bot_name, &bot_name))
    }

    /// Check internal consistency: unique ids, percentages within 0–100 and
    /// area references that resolve.
    pub fn validate(&self) -> Result<()> {
        if self.areas.is_empty() {
            return Err(Error::fixture("snapshot has no functional areas"));
        }

        ensure_unique("area", self.areas.iter().map(|a| &a.id))?;
        ensure_unique("bot", self.bots.iter().map(|b| &b.id))?;
        ensure_unique("issue", self.issues.iter().map(|i| &i.id))?;
        ensure_unique("insight", self.insights.iter().map(|i| &i.id))?;
        ensure_unique("fix", self.fixes.iter().map(|f| &f.id))?;

        for area in &self.areas {
            ensure_percent(&format!("area {}", area.id), area.success_rate)?;
        }
        for bot in &self.bots {
            ensure_percent(&format!("bot {}", bot.id), bot.success_rate)?;
        }
        for insight in &self.insights {
            ensure_percent(&format!("insight {}", insight.id), insight.confidence)?;
        }
        ensure_percent("summary", self.summary.success_rate_7d)?;
        ensure_percent("analytics", self.analytics.success_rate)?;

        let scopes = self
            .bots
            .iter()
            .map(|b| b.area_id.as_ref())
            .chain(self.runs.iter().map(|r| r.area_id.as_ref()))
            .chain(self.issues.iter().map(|i| i.area_id.as_ref()))
            .chain(self.insights.iter().map(|i| i.area_id.as_ref()))
            .chain(self.fixes.iter().map(|f| f.area_id.as_ref()))
            .flatten();
        for scope in scopes {
            if self.area(scope).is_none() {
                return Err(Error::fixture(format!("reference to unknown area {scope}")));
            }
        }

        Ok(())
    }
}

/// Run history labels some bots without their numeric suffix
/// (`OrderSubmitBot` for `OrderSubmitBot01`).
fn names_match(run_name: &str, bot_name: &str) -> bool {
    run_name == bot_name || bot_name.trim_end_matches(|c: char| c.is_ascii_digit()) == run_name
}

fn ensure_unique<'a, T>(kind: &str, ids: impl Iterator<Item = &'a T>) -> Result<()>
where
    T: Eq + Hash + std::fmt::Display + 'a,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(Error::fixture(format!("duplicate {kind} id {id}")));
        }
    }
    Ok(())
}

fn ensure_percent(what: &str, value: u8) -> Result<()> {
    if value > 100 {
        return Err(Error::fixture(format!(
            "{what}: percentage {value} is above 100"
        )));
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Providers
// ─────────────────────────────────────────────────────────────────────────────

/// Supplies the reporting snapshot at session start.
///
/// Implementations return a complete, validated snapshot or an error; there
/// is no partial result.
#[cfg_attr(any(test, feature = "test-helpers"), mockall::automock)]
pub trait ReportProvider {
    fn load(&self) -> Result<ReportSnapshot>;

    /// Short description shown in the settings view
    fn describe(&self) -> String;
}

/// Serves the built-in literal data set
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureProvider;

impl ReportProvider for FixtureProvider {
    fn load(&self) -> Result<ReportSnapshot> {
        let snapshot = crate::fixture::builtin();
        snapshot.validate()?;
        Ok(snapshot)
    }

    fn describe(&self) -> String {
        "built-in fixture".to_string()
    }
}

/// Loads a snapshot from a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportProvider for JsonFileProvider {
    fn load(&self) -> Result<ReportSnapshot> {
        if !self.path.exists() {
            return Err(Error::fixture_not_found(&self.path));
        }

        let content = std::fs::read_to_string(&self.path)?;
        let snapshot: ReportSnapshot = serde_json::from_str(&content)?;
        snapshot.validate()?;

        tracing::debug!(
            "Loaded snapshot from {:?}: {} areas, {} bots",
            self.path,
            snapshot.areas.len(),
            snapshot.bots.len()
        );
        Ok(snapshot)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AreaHealth, BotStatus};
    use tempfile::tempdir;

    fn area(id: &str) -> FunctionalArea {
        FunctionalArea {
            id: AreaId::from(id),
            title: format!("Area {id}"),
            active_bot_count: 1,
            health: AreaHealth::Healthy,
            last_issue: "N/A".to_string(),
            success_rate: 100,
        }
    }

    fn bot(id: &str, area_id: Option<&str>) -> Bot {
        Bot {
            id: BotId::from(id),
            area_id: area_id.map(AreaId::from),
            name: format!("Bot{id}"),
            status: BotStatus::Healthy,
            last_run: "9:00 AM".to_string(),
            success_rate: 99,
            avg_runtime: "3s".to_string(),
            failures_7d: 0,
        }
    }

    #[test]
    fn test_fleet_wide_records_are_listed_under_every_area() {
        let snapshot = crate::fixture::builtin();
        for area in &snapshot.areas {
            assert_eq!(snapshot.bots_for(&area.id).count(), snapshot.bots.len());
            assert_eq!(snapshot.fixes_for(&area.id).count(), snapshot.fixes.len());
        }
    }

    #[test]
    fn test_scoped_records_only_appear_in_their_area() {
        let snapshot = ReportSnapshot {
            areas: vec![area("1"), area("2")],
            bots: vec![bot("a", Some("1")), bot("b", Some("2")), bot("c", None)],
            ..Default::default()
        };

        let in_one: Vec<_> = snapshot
            .bots_for(&AreaId::from("1"))
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(in_one, vec!["a", "c"]);

        assert!(snapshot
            .bot_in_area(&AreaId::from("2"), &BotId::from("a"))
            .is_none());
        assert!(snapshot
            .bot_in_area(&AreaId::from("2"), &BotId::from("b"))
            .is_some());
    }

    #[test]
    fn test_scoped_lookups_outlive_the_area_key() {
        let snapshot = crate::fixture::builtin();

        let (bot, fix) = {
            let key = AreaId::from("2");
            (
                snapshot.bot_in_area(&key, &BotId::from("3")),
                snapshot.fix_in_area(&key, &FixId::from("1")),
            )
        };
        assert_eq!(bot.map(|b| b.name.as_str()), Some("ERPUpdateBot"));
        assert!(fix.is_some());

        let errors: Vec<&RunHistoryEntry> = {
            let key = AreaId::from("2");
            let name = String::from("ERPUpdateBot");
            snapshot.recent_errors(&key, &name).collect()
        };
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_recent_errors_match_run_history_by_name() {
        let snapshot = crate::fixture::builtin();
        let area = AreaId::from("1");

        let errors: Vec<_> = snapshot
            .recent_errors(&area, "ERPUpdateBot")
            .filter_map(|run| run.outcome.error())
            .collect();
        assert_eq!(errors, vec!["SAP API Timeout (504)"]);

        assert_eq!(snapshot.recent_errors(&area, "AddressCheckBot").count(), 0);
    }

    #[test]
    fn test_names_match_ignores_numeric_suffix() {
        assert!(names_match("OrderSubmitBot", "OrderSubmitBot01"));
        assert!(names_match("ERPUpdateBot", "ERPUpdateBot"));
        assert!(!names_match("ConfirmOrderBot", "OrderSubmitBot01"));
    }

    #[test]
    fn test_validate_accepts_builtin_fixture() {
        crate::fixture::builtin().validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let snapshot = ReportSnapshot {
            areas: vec![area("1"), area("1")],
            ..Default::default()
        };
        let err = snapshot.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate area id 1"));
    }

    #[test]
    fn test_validate_rejects_percent_above_100() {
        let mut snapshot = ReportSnapshot {
            areas: vec![area("1")],
            bots: vec![bot("a", None)],
            ..Default::default()
        };
        snapshot.bots[0].success_rate = 101;
        assert!(matches!(snapshot.validate(), Err(Error::Fixture { .. })));
    }

    #[test]
    fn test_validate_rejects_unknown_area_reference() {
        let snapshot = ReportSnapshot {
            areas: vec![area("1")],
            bots: vec![bot("a", Some("9"))],
            ..Default::default()
        };
        let err = snapshot.validate().unwrap_err();
        assert!(err.to_string().contains("unknown area 9"));
    }

    #[test]
    fn test_validate_rejects_empty_snapshot() {
        assert!(ReportSnapshot::default().validate().is_err());
    }

    #[test]
    fn test_fixture_provider_loads_valid_snapshot() {
        let snapshot = FixtureProvider.load().unwrap();
        assert_eq!(snapshot.areas.len(), 4);
        assert_eq!(FixtureProvider.describe(), "built-in fixture");
    }

    #[test]
    fn test_json_file_provider_reads_exported_snapshot() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("snapshot.json");
        let exported = serde_json::to_string_pretty(&crate::fixture::builtin()).unwrap();
        std::fs::write(&path, exported).unwrap();

        let provider = JsonFileProvider::new(&path);
        let snapshot = provider.load().unwrap();

        assert_eq!(snapshot, crate::fixture::builtin());
        assert_eq!(provider.path(), path.as_path());
    }

    #[test]
    fn test_json_file_provider_missing_file() {
        let temp = tempdir().unwrap();
        let provider = JsonFileProvider::new(temp.path().join("missing.json"));
        assert!(matches!(
            provider.load(),
            Err(Error::FixtureNotFound { .. })
        ));
    }

    #[test]
    fn test_json_file_provider_invalid_json() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let provider = JsonFileProvider::new(&path);
        assert!(matches!(provider.load(), Err(Error::Json(_))));
    }

    #[test]
    fn test_json_file_provider_minimal_snapshot_uses_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("minimal.json");
        std::fs::write(
            &path,
            r#"{"areas":[{"id":"7","title":"Payroll","active_bot_count":1,
                "health":"error","last_issue":"5 mins ago","success_rate":40}]}"#,
        )
        .unwrap();

        let snapshot = JsonFileProvider::new(&path).load().unwrap();
        assert_eq!(snapshot.areas[0].health, AreaHealth::Error);
        assert!(snapshot.bots.is_empty());
    }
}
