use std::time::Duration;

use gamehub_common::GameId;
use gamehub_config::schema::AssistantConfig;

/// Timer cadences and the high-energy game id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssistantTiming {
    pub tilt_master_game: GameId,
    pub welcome: Duration,
    pub tilt_tick: Duration,
    pub bounce_tick: Duration,
    pub eye_tick: Duration,
    pub wave_tick: Duration,
}

impl Default for AssistantTiming {
    fn default() -> Self {
        Self::from_config(&AssistantConfig::default())
    }
}

impl AssistantTiming {
    pub fn from_config(config: &AssistantConfig) -> Self {
        let ms = |v: u32| Duration::from_millis(u64::from(v));
        Self {
            tilt_master_game: config.tilt_master_game,
            welcome: ms(config.welcome_ms),
            tilt_tick: ms(config.tilt_tick_ms),
            bounce_tick: ms(config.bounce_tick_ms),
            eye_tick: ms(config.eye_tick_ms),
            wave_tick: ms(config.wave_tick_ms),
        }
    }
}
