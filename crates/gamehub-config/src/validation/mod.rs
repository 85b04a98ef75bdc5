//! Full configuration validation.
//!
//! Each section has its own submodule; `validate` calls them all and
//! collects errors into a single `ConfigError`.

mod assistant;
mod helpers;
mod launcher;
mod service;


use crate::schema::GameHubConfig;
use gamehub_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GameHubConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    service::validate_service(&mut errors, config);
    launcher::validate_launcher(&mut errors, config);
    assistant::validate_assistant(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
