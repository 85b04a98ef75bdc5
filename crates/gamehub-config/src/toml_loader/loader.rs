use std::path::Path;

use gamehub_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};
use crate::schema::GameHubConfig;
use crate::validation;

fn parse(path: &Path) -> Result<GameHubConfig, ConfigError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("cannot read {}: {e}", path.display())))?;
    toml::from_str(&text).map_err(|e| {
        ConfigError::ParseError(format!("{} is not valid config TOML: {e}", path.display()))
    })
}

/// Parse one file. Absent keys fall back to the stock two-game setup.
///
/// Out-of-range values are reported in the log but not rejected here;
/// [`crate::load_config_from`] is the strict entry point.
pub fn load_from_path(path: &Path) -> Result<GameHubConfig, ConfigError> {
    let config = parse(path)?;
    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), error = %e, "config has invalid values");
    }
    info!(path = %path.display(), games = config.launcher.games.len(), "config loaded");
    Ok(config)
}

/// Use the per-user file, seeding it on first run. A fresh seed yields
/// the built-in defaults without re-reading it.
pub fn load_default() -> Result<GameHubConfig, ConfigError> {
    let path = default_config_path()?;
    if path.exists() {
        return load_from_path(&path);
    }
    info!(path = %path.display(), "first run, seeding config");
    create_default_config(&path)?;
    Ok(GameHubConfig::default())
}
