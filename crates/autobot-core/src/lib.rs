//! # autobot-core - Core Domain Types
//!
//! Foundation crate for AutoBot. Provides the reporting snapshot model,
//! derived status computations, the built-in fixture, error handling and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, chrono).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`FunctionalArea`], [`Bot`], [`RunHistoryEntry`], [`IssueCluster`],
//!   [`Insight`], [`SuggestedFix`] - Read-only reference records
//! - [`AreaId`], [`BotId`], [`FixId`] - Typed identifiers
//!
//! ### Snapshot (`report`)
//! - [`ReportSnapshot`] - Complete data set with area-scoped queries
//! - [`ReportProvider`] - Source of the snapshot ([`FixtureProvider`], [`JsonFileProvider`])
//!
//! ### Derived Status (`status`)
//! - [`overall_status()`] - Worst-of aggregation over bot statuses
//! - [`SuccessBand`] - Gauge colour band for a success rate
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum for I/O, terminal and snapshot failures
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context

pub mod error;
pub mod fixture;
pub mod logging;
pub mod report;
pub mod status;
pub mod types;

/// Prelude for common imports used throughout all AutoBot crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
#[cfg(any(test, feature = "test-helpers"))]
pub use report::MockReportProvider;
pub use report::{FixtureProvider, JsonFileProvider, ReportProvider, ReportSnapshot};
pub use status::{bot_diagnosis, overall_area_status, overall_status, SuccessBand};
pub use types::{
    AreaHealth, AreaId, AutomationSummary, Bot, BotId, BotStatus, FixId, FunctionalArea, Insight,
    InsightId, InsightKind, InsightSeverity, IssueCluster, IssueId, IssueSeverity, RunAnalytics,
    RunHistoryEntry, RunOutcome, SuggestedFix,
};
