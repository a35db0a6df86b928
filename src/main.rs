//! AutoBot - A terminal control center for monitoring automation bots
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use autobot_app::config::{self, Settings};
use autobot_app::AppState;
use autobot_core::prelude::*;
use autobot_core::{logging, ReportProvider};
use clap::Parser;

/// AutoBot - A terminal control center for monitoring automation bots
#[derive(Parser, Debug)]
#[command(name = "autobot")]
#[command(about = "A terminal control center for monitoring automation bots", long_about = None)]
struct Args {
    /// Directory holding `.autobot/config.toml` (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// JSON snapshot to load instead of the configured or built-in report
    #[arg(long, value_name = "FILE")]
    fixture: Option<PathBuf>,

    /// Print the active snapshot as pretty JSON and exit
    #[arg(long)]
    export: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns the terminal)
    logging::init().context("initializing logging")?;

    let config_dir = args
        .config_dir
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    info!("Config directory: {}", config_dir.display());

    let settings = config::load_settings(&config_dir);
    let provider = config::resolve_provider(&settings, &config_dir, args.fixture.as_deref());

    let result = if args.export {
        export_snapshot(provider.as_ref())
    } else {
        run_dashboard(provider.as_ref(), settings).await
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("AutoBot exiting");
    result
}

/// Print the snapshot served by `provider` to stdout
fn export_snapshot(provider: &dyn ReportProvider) -> Result<()> {
    let snapshot = provider
        .load()
        .with_context(|| format!("loading report from {}", provider.describe()))?;
    let json = serde_json::to_string_pretty(&snapshot)?;
    println!("{}", json);
    info!("Exported snapshot from {}", provider.describe());
    Ok(())
}

async fn run_dashboard(provider: &dyn ReportProvider, settings: Settings) -> Result<()> {
    let state = AppState::from_provider(provider, settings)
        .with_context(|| format!("loading report from {}", provider.describe()))?;
    autobot_tui::run(state).await
}
