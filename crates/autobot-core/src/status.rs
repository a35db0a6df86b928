//! Derived status computations
//!
//! Pure functions over snapshot records. Nothing here is cached; callers
//! recompute from the current snapshot on every render.

use crate::types::{Bot, BotStatus};

/// Worst-of aggregation over bot statuses (`Critical > Warning > Healthy`).
///
/// An empty set is healthy. The result does not depend on iteration order.
pub fn overall_status<I>(statuses: I) -> BotStatus
where
    I: IntoIterator<Item = BotStatus>,
{
    statuses.into_iter().max().unwrap_or(BotStatus::Healthy)
}

/// Overall status of an area from the bots listed under it
pub fn overall_area_status<'a, I>(bots: I) -> BotStatus
where
    I: IntoIterator<Item = &'a Bot>,
{
    overall_status(bots.into_iter().map(|bot| bot.status))
}

/// Colour band for a success-rate gauge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessBand {
    /// 90% and above
    Good,
    /// 75% to 89%
    Fair,
    /// Below 75%
    Poor,
}

impl SuccessBand {
    pub fn from_percent(percent: u8) -> Self {
        if percent >= 90 {
            SuccessBand::Good
        } else if percent >= 75 {
            SuccessBand::Fair
        } else {
            SuccessBand::Poor
        }
    }
}

/// Canned diagnostic line shown in the bot detail modal
pub fn bot_diagnosis(status: BotStatus) -> &'static str {
    match status {
        BotStatus::Critical => {
            "Pattern detected: Failures occur during SAP maintenance window (2-4 AM). \
             Recommend schedule adjustment."
        }
        BotStatus::Warning => {
            "Minor performance degradation detected. Consider optimizing database queries."
        }
        BotStatus::Healthy => "Bot is performing optimally. No issues detected.",
    }
}
