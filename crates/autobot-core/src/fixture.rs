//! Built-in reporting snapshot
//!
//! The bot, run, issue, insight and fix lists are fleet-wide (`area_id: None`)
//! so every functional area lists them.

use crate::report::ReportSnapshot;
use crate::types::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn area(
    id: &str,
    title: &str,
    active_bot_count: u32,
    health: AreaHealth,
    last_issue: &str,
    success_rate: u8,
) -> FunctionalArea {
    FunctionalArea {
        id: AreaId::from(id),
        title: title.to_string(),
        active_bot_count,
        health,
        last_issue: last_issue.to_string(),
        success_rate,
    }
}

fn bot(
    id: &str,
    name: &str,
    status: BotStatus,
    last_run: &str,
    success_rate: u8,
    avg_runtime: &str,
    failures_7d: u32,
) -> Bot {
    Bot {
        id: BotId::from(id),
        area_id: None,
        name: name.to_string(),
        status,
        last_run: last_run.to_string(),
        success_rate,
        avg_runtime: avg_runtime.to_string(),
        failures_7d,
    }
}

fn run(timestamp: &str, bot_name: &str, runtime: &str, error: Option<&str>) -> RunHistoryEntry {
    RunHistoryEntry {
        area_id: None,
        timestamp: timestamp.to_string(),
        bot_name: bot_name.to_string(),
        runtime: runtime.to_string(),
        outcome: match error {
            Some(error) => RunOutcome::Failure {
                error: error.to_string(),
            },
            None => RunOutcome::Success,
        },
    }
}

/// The literal data set shipped with the binary
pub fn builtin() -> ReportSnapshot {
    ReportSnapshot {
        areas: vec![
            area("1", "Order Processing", 5, AreaHealth::Healthy, "1 day ago", 94),
            area("2", "Veterinary Pathology", 3, AreaHealth::Warning, "3 hrs ago", 87),
            area("3", "Customer Self-Service", 4, AreaHealth::Healthy, "N/A", 100),
            area("4", "Finance Reconciliations", 2, AreaHealth::Warning, "45 mins ago", 75),
        ],
        bots: vec![
            bot("1", "OrderSubmitBot01", BotStatus::Healthy, "10:03 AM", 94, "18s", 1),
            bot("2", "AddressCheckBot", BotStatus::Healthy, "9:42 AM", 100, "5s", 0),
            bot("3", "ERPUpdateBot", BotStatus::Critical, "8:21 AM", 75, "32s", 3),
            bot("4", "ConfirmOrderBot", BotStatus::Healthy, "10:10 AM", 99, "4s", 0),
            bot("5", "ReprocessFailedOrdersBot", BotStatus::Warning, "7:50 AM", 88, "40s", 2),
        ],
        runs: vec![
            run("10:03 AM", "OrderSubmitBot", "18s", None),
            run("09:42 AM", "AddressCheckBot", "5s", None),
            run("08:21 AM", "ERPUpdateBot", "32s", Some("SAP API Timeout (504)")),
            run("08:19 AM", "ConfirmOrderBot", "4s", None),
            run("07:50 AM", "ReprocessFailedOrdersBot", "40s", Some("Invalid record format")),
        ],
        issues: vec![
            IssueCluster {
                id: IssueId::from("1"),
                area_id: None,
                severity: IssueSeverity::Critical,
                title: "SAP Latency".to_string(),
                impacted_bots: strings(&["ERPUpdateBot", "ReprocessFailedOrdersBot"]),
                failure_count: 4,
                time_window: "1:00–4:00 AM".to_string(),
                explanation: "SAP batch maintenance window overlaps with your bot run schedule."
                    .to_string(),
            },
            IssueCluster {
                id: IssueId::from("2"),
                area_id: None,
                severity: IssueSeverity::Warning,
                title: "Vendor Data Quality".to_string(),
                impacted_bots: strings(&["AddressCheckBot"]),
                failure_count: 14,
                time_window: "Ongoing".to_string(),
                explanation: "14 records with invalid ZIP codes. Source: VendorFeed API"
                    .to_string(),
            },
            IssueCluster {
                id: IssueId::from("3"),
                area_id: None,
                severity: IssueSeverity::Minor,
                title: "Retry Threshold Reached".to_string(),
                impacted_bots: strings(&["OrderSubmitBot"]),
                failure_count: 2,
                time_window: "11:12 PM".to_string(),
                explanation: "2 retries exceeded at 11:12 PM".to_string(),
            },
        ],
        insights: vec![
            Insight {
                id: InsightId::from("1"),
                area_id: None,
                kind: InsightKind::RootCause,
                severity: InsightSeverity::High,
                confidence: 92,
                title: "SAP Latency Issue".to_string(),
                description: "Failures spike during 2–4 AM ET".to_string(),
                evidence: "12 logs analyzed".to_string(),
                proposed_steps: strings(&[
                    "Move schedule to 5:30 AM",
                    "Add exponential retry",
                    "Add API health check pre-run",
                ]),
            },
            Insight {
                id: InsightId::from("2"),
                area_id: None,
                kind: InsightKind::Prediction,
                severity: InsightSeverity::High,
                confidence: 63,
                title: "ERPUpdateBot Predicted Failure".to_string(),
                description: "Predicted failure probability in next 24 hours: 63%".to_string(),
                evidence: "Historical pattern analysis".to_string(),
                proposed_steps: strings(&[
                    "Enable proactive monitoring",
                    "Schedule preventive maintenance",
                ]),
            },
            Insight {
                id: InsightId::from("3"),
                area_id: None,
                kind: InsightKind::Optimization,
                severity: InsightSeverity::Medium,
                confidence: 85,
                title: "OrderSubmitBot Runtime Optimization".to_string(),
                description: "OrderSubmitBot could save 12% runtime by caching product metadata"
                    .to_string(),
                evidence: "Performance profiling".to_string(),
                proposed_steps: strings(&[
                    "Implement metadata caching",
                    "Add cache invalidation logic",
                ]),
            },
        ],
        fixes: vec![
            SuggestedFix {
                id: FixId::from("1"),
                area_id: None,
                bot_name: "ERPUpdateBot".to_string(),
                changes: strings(&[
                    "Change schedule from 3:00 AM → 5:30 AM",
                    "Add 3-retry policy",
                    "Add pre-run SAP health call",
                    "Add 2-second exponential backoff",
                ]),
                expected_improvement: "~85% reduction in failures".to_string(),
            },
            SuggestedFix {
                id: FixId::from("2"),
                area_id: None,
                bot_name: "AddressCheckBot".to_string(),
                changes: strings(&[
                    "Add ZIP code validation regex",
                    "Implement data quality logging",
                ]),
                expected_improvement: "100% data quality coverage".to_string(),
            },
        ],
        summary: AutomationSummary {
            success_rate_7d: 94,
            failures_7d: 3,
            avg_runtime: "18s".to_string(),
            hours_saved_mtd: 312,
            next_run: "11:30 AM ET".to_string(),
            last_sync: "10:45 AM ET".to_string(),
        },
        analytics: RunAnalytics {
            total_runs: 312,
            success_rate: 94,
            peak_failure_hours: "1–4 AM".to_string(),
            top_failing_bot: "ERPUpdateBot".to_string(),
        },
    }
}
