//! Domain records for the reporting snapshot
//!
//! Every record here is immutable reference data. Session state (selected
//! tab, applied fixes, ...) lives in `autobot-app`, never on these types.

use serde::{Deserialize, Serialize};
use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Identifiers
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Identity of a functional area
    AreaId
);
string_id!(
    /// Identity of a bot
    BotId
);
string_id!(
    /// Identity of an issue cluster
    IssueId
);
string_id!(
    /// Identity of an insight
    InsightId
);
string_id!(
    /// Identity of a suggested fix
    FixId
);

// ─────────────────────────────────────────────────────────────────────────────
// Functional areas
// ─────────────────────────────────────────────────────────────────────────────

/// Health reported for a functional area card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaHealth {
    #[default]
    Healthy,
    Warning,
    Error,
}

impl AreaHealth {
    pub fn label(&self) -> &'static str {
        match self {
            AreaHealth::Healthy => "Healthy",
            AreaHealth::Warning => "Warning",
            AreaHealth::Error => "Error",
        }
    }
}

/// A named business process category aggregating bots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionalArea {
    pub id: AreaId,
    pub title: String,
    pub active_bot_count: u32,
    pub health: AreaHealth,
    pub last_issue: String,
    pub success_rate: u8,
}

// ─────────────────────────────────────────────────────────────────────────────
// Bots
// ─────────────────────────────────────────────────────────────────────────────

/// Bot health, ordered by severity (`Healthy < Warning < Critical`)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum BotStatus {
    #[default]
    Healthy,
    Warning,
    Critical,
}

impl BotStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BotStatus::Healthy => "Healthy",
            BotStatus::Warning => "Warning",
            BotStatus::Critical => "Critical",
        }
    }
}

impl fmt::Display for BotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotStatus::Healthy => write!(f, "healthy"),
            BotStatus::Warning => write!(f, "warning"),
            BotStatus::Critical => write!(f, "critical"),
        }
    }
}

/// A simulated automated task unit with run metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bot {
    pub id: BotId,
    /// Owning area; `None` means the bot is listed under every area
    #[serde(default)]
    pub area_id: Option<AreaId>,
    pub name: String,
    pub status: BotStatus,
    pub last_run: String,
    pub success_rate: u8,
    pub avg_runtime: String,
    pub failures_7d: u32,
}

// ─────────────────────────────────────────────────────────────────────────────
// Run history
// ─────────────────────────────────────────────────────────────────────────────

/// Result of a single bot run. A failure always carries its error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum RunOutcome {
    Success,
    Failure { error: String },
}

impl RunOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, RunOutcome::Failure { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            RunOutcome::Success => "Success",
            RunOutcome::Failure { .. } => "Fail",
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RunOutcome::Success => None,
            RunOutcome::Failure { error } => Some(error),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunHistoryEntry {
    #[serde(default)]
    pub area_id: Option<AreaId>,
    pub timestamp: String,
    pub bot_name: String,
    pub runtime: String,
    #[serde(flatten)]
    pub outcome: RunOutcome,
}

// ─────────────────────────────────────────────────────────────────────────────
// Issue clusters
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Critical,
    Warning,
    Minor,
}

impl IssueSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            IssueSeverity::Critical => "Critical",
            IssueSeverity::Warning => "Warning",
            IssueSeverity::Minor => "Minor",
        }
    }
}

/// A grouped set of correlated failures with a proposed explanation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCluster {
    pub id: IssueId,
    #[serde(default)]
    pub area_id: Option<AreaId>,
    pub severity: IssueSeverity,
    pub title: String,
    pub impacted_bots: Vec<String>,
    pub failure_count: u32,
    pub time_window: String,
    pub explanation: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Insights
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsightKind {
    RootCause,
    Prediction,
    Optimization,
}

impl InsightKind {
    pub fn label(&self) -> &'static str {
        match self {
            InsightKind::RootCause => "Root Cause Analysis",
            InsightKind::Prediction => "Predictive Analysis",
            InsightKind::Optimization => "Optimization Opportunity",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightSeverity {
    High,
    Medium,
    Low,
}

impl fmt::Display for InsightSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsightSeverity::High => write!(f, "high"),
            InsightSeverity::Medium => write!(f, "medium"),
            InsightSeverity::Low => write!(f, "low"),
        }
    }
}

/// A diagnostic statement with a confidence score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub id: InsightId,
    #[serde(default)]
    pub area_id: Option<AreaId>,
    pub kind: InsightKind,
    pub severity: InsightSeverity,
    pub confidence: u8,
    pub title: String,
    pub description: String,
    pub evidence: String,
    pub proposed_steps: Vec<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Suggested fixes
// ─────────────────────────────────────────────────────────────────────────────

/// A proposed remediation. Whether it has been applied is session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedFix {
    pub id: FixId,
    #[serde(default)]
    pub area_id: Option<AreaId>,
    pub bot_name: String,
    pub changes: Vec<String>,
    pub expected_improvement: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Summary figures
// ─────────────────────────────────────────────────────────────────────────────

/// Headline figures shown on the overview tab
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AutomationSummary {
    pub success_rate_7d: u8,
    pub failures_7d: u32,
    pub avg_runtime: String,
    pub hours_saved_mtd: u32,
    pub next_run: String,
    pub last_sync: String,
}

/// Seven-day run analytics shown on the history tab
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunAnalytics {
    pub total_runs: u32,
    pub success_rate: u8,
    pub peak_failure_hours: String,
    pub top_failing_bot: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bot_status_ordering_is_by_severity() {
        assert!(BotStatus::Healthy < BotStatus::Warning);
        assert!(BotStatus::Warning < BotStatus::Critical);
    }

    #[test]
    fn test_run_outcome_serializes_with_result_tag() {
        let entry = RunHistoryEntry {
            area_id: None,
            timestamp: "08:21 AM".to_string(),
            bot_name: "ERPUpdateBot".to_string(),
            runtime: "32s".to_string(),
            outcome: RunOutcome::Failure {
                error: "SAP API Timeout (504)".to_string(),
            },
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["result"], "failure");
        assert_eq!(json["error"], "SAP API Timeout (504)");
    }

    #[test]
    fn test_success_outcome_has_no_error() {
        let json = r#"{"timestamp":"10:03 AM","bot_name":"OrderSubmitBot","runtime":"18s","result":"success"}"#;
        let entry: RunHistoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.outcome, RunOutcome::Success);
        assert_eq!(entry.outcome.error(), None);
        assert!(entry.area_id.is_none());
    }

    #[test]
    fn test_failure_without_error_is_rejected() {
        let json = r#"{"timestamp":"1","bot_name":"B","runtime":"1s","result":"failure"}"#;
        assert!(serde_json::from_str::<RunHistoryEntry>(json).is_err());
    }

    #[test]
    fn test_insight_kind_uses_kebab_case() {
        let kind: InsightKind = serde_json::from_str(r#""root-cause""#).unwrap();
        assert_eq!(kind, InsightKind::RootCause);
        assert_eq!(kind.label(), "Root Cause Analysis");
    }

    #[test]
    fn test_ids_display_and_compare() {
        let id = AreaId::from("2");
        assert_eq!(id.to_string(), "2");
        assert_eq!(id, AreaId::new("2"));
        assert_eq!(id.as_str(), "2");
    }
}
