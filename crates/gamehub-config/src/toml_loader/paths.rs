use std::path::{Path, PathBuf};

use gamehub_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

/// Where the hub looks when no `--config` is given.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    match dirs::config_dir() {
        Some(base) => Ok(base.join("gamehub").join("config.toml")),
        None => Err(ConfigError::ParseError(
            "no per-user config directory on this platform".into(),
        )),
    }
}

/// Seed `path` with the annotated starter file.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_failure = |what: &str, e: std::io::Error| {
        ConfigError::ParseError(format!("{what} {}: {e}", path.display()))
    };
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| io_failure("cannot prepare directory for", e))?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| io_failure("cannot seed", e))?;
    info!(path = %path.display(), "starter config written");
    Ok(())
}
