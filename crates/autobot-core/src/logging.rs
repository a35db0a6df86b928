//! Logging configuration using tracing

use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "AUTOBOT_LOG";

const LOG_FILE_NAME: &str = "autobot.log";

/// Info for every AutoBot crate, warn for everything else
const DEFAULT_FILTER: &str = "autobot=info,autobot_core=info,autobot_app=info,autobot_tui=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/autobot/logs/` because the terminal
/// itself belongs to the TUI. Log level is controlled by `AUTOBOT_LOG`.
///
/// # Examples
/// ```bash
/// AUTOBOT_LOG=debug cargo run
/// AUTOBOT_LOG=autobot_app=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("AutoBot starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("autobot").join("logs")
}

/// Get the log file path for the current day
///
/// The daily appender suffixes the file name with the UTC date.
pub fn get_current_log_file() -> PathBuf {
    log_file_for(Utc::now().date_naive())
}

fn log_file_for(date: NaiveDate) -> PathBuf {
    get_log_directory().join(format!("{}.{}", LOG_FILE_NAME, date.format("%Y-%m-%d")))
}
