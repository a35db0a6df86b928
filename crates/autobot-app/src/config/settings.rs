//! Settings parser for .autobot/config.toml

use std::path::{Path, PathBuf};

use autobot_core::prelude::*;
use autobot_core::{FixtureProvider, JsonFileProvider, ReportProvider};

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const AUTOBOT_DIR: &str = ".autobot";

/// Path of the settings file under `config_dir`
pub fn config_file_path(config_dir: &Path) -> PathBuf {
    config_dir.join(AUTOBOT_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `<config_dir>/.autobot/config.toml`.
///
/// Never fails: a missing, unreadable or invalid file yields defaults.
pub fn load_settings(config_dir: &Path) -> Settings {
    let config_path = config_file_path(config_dir);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Pick the snapshot source.
///
/// The CLI override wins over `report.fixture`; with neither, the built-in
/// fixture is served. A relative `report.fixture` resolves against
/// `config_dir`.
pub fn resolve_provider(
    settings: &Settings,
    config_dir: &Path,
    cli_fixture: Option<&Path>,
) -> Box<dyn ReportProvider> {
    if let Some(path) = cli_fixture {
        return Box::new(JsonFileProvider::new(path));
    }

    match &settings.report.fixture {
        Some(path) if path.is_absolute() => Box::new(JsonFileProvider::new(path)),
        Some(path) => Box::new(JsonFileProvider::new(config_dir.join(path))),
        None => Box::new(FixtureProvider),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconMode;
    use crate::dashboard::NavTab;
    use tempfile::tempdir;

    fn write_config(dir: &Path, content: &str) {
        let autobot_dir = dir.join(AUTOBOT_DIR);
        std::fs::create_dir_all(&autobot_dir).unwrap();
        std::fs::write(autobot_dir.join(CONFIG_FILENAME), content).unwrap();
    }

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        write_config(
            temp.path(),
            r#"
[ui]
icons = "nerd_fonts"
default_nav_tab = "insights"

[behavior]
confirm_quit = true

[report]
fixture = "snapshots/today.json"
"#,
        );

        let settings = load_settings(temp.path());

        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert_eq!(settings.ui.default_nav_tab, NavTab::Insights);
        assert!(settings.behavior.confirm_quit);
        assert_eq!(
            settings.report.fixture,
            Some(PathBuf::from("snapshots/today.json"))
        );
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        write_config(temp.path(), "not valid toml {{{{");

        // Should return defaults
        let settings = load_settings(temp.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_resolve_provider_builtin() {
        let temp = tempdir().unwrap();
        let provider = resolve_provider(&Settings::default(), temp.path(), None);
        assert_eq!(provider.describe(), "built-in fixture");
    }

    #[test]
    fn test_resolve_provider_relative_to_config_dir() {
        let temp = tempdir().unwrap();
        let mut settings = Settings::default();
        settings.report.fixture = Some(PathBuf::from("snap.json"));

        let provider = resolve_provider(&settings, temp.path(), None);
        assert_eq!(
            provider.describe(),
            temp.path().join("snap.json").display().to_string()
        );
    }

    #[test]
    fn test_resolve_provider_cli_wins() {
        let temp = tempdir().unwrap();
        let mut settings = Settings::default();
        settings.report.fixture = Some(PathBuf::from("snap.json"));
        let cli = temp.path().join("cli.json");

        let provider = resolve_provider(&settings, temp.path(), Some(&cli));
        assert_eq!(provider.describe(), cli.display().to_string());
    }
}
