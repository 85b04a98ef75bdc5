use crate::schema::GameHubConfig;

use super::helpers::validate_range;

pub(crate) fn validate_assistant(errors: &mut Vec<String>, config: &GameHubConfig) {
    let assistant = &config.assistant;

    if !config
        .launcher
        .games
        .iter()
        .any(|g| g.id == assistant.tilt_master_game)
    {
        errors.push(format!(
            "assistant.tilt_master_game = {} is not a configured game",
            assistant.tilt_master_game.0
        ));
    }

    validate_range(errors, "assistant.welcome_ms", assistant.welcome_ms, 0, 60_000);
    validate_range(errors, "assistant.tilt_tick_ms", assistant.tilt_tick_ms, 10, 1000);
    validate_range(
        errors,
        "assistant.bounce_tick_ms",
        assistant.bounce_tick_ms,
        10,
        1000,
    );
    validate_range(errors, "assistant.eye_tick_ms", assistant.eye_tick_ms, 10, 1000);
    validate_range(errors, "assistant.wave_tick_ms", assistant.wave_tick_ms, 10, 1000);
}
