use std::collections::HashSet;

use crate::schema::GameHubConfig;

use super::helpers::validate_range;

pub(crate) fn validate_launcher(errors: &mut Vec<String>, config: &GameHubConfig) {
    let launcher = &config.launcher;

    if launcher.games.is_empty() {
        errors.push("launcher.games must list at least one game".into());
    }

    let mut seen = HashSet::new();
    for game in &launcher.games {
        if !seen.insert(game.id) {
            errors.push(format!("launcher.games has duplicate id {}", game.id.0));
        }
        if game.name.trim().is_empty() {
            errors.push(format!("launcher.games id {} has an empty name", game.id.0));
        }
    }

    if launcher.decoy_enabled && !seen.contains(&launcher.decoy_game) {
        errors.push(format!(
            "launcher.decoy_game = {} is not a configured game",
            launcher.decoy_game.0
        ));
    }

    validate_range(
        errors,
        "launcher.decoy_delay_ms",
        launcher.decoy_delay_ms,
        0,
        60_000,
    );
}
