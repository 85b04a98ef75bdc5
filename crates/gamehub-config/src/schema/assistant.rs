//! Animated assistant timing.

use gamehub_common::GameId;
use serde::{Deserialize, Serialize};

/// Assistant animation configuration. All values are milliseconds except
/// `tilt_master_game`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Game whose activation puts the assistant into its highest-energy phase.
    pub tilt_master_game: GameId,
    /// Length of the welcome window after mount (0-60000).
    pub welcome_ms: u32,
    /// Tick intervals (10-1000).
    pub tilt_tick_ms: u32,
    pub bounce_tick_ms: u32,
    pub eye_tick_ms: u32,
    pub wave_tick_ms: u32,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            tilt_master_game: GameId(1),
            welcome_ms: 8000,
            tilt_tick_ms: 40,
            bounce_tick_ms: 50,
            eye_tick_ms: 50,
            wave_tick_ms: 100,
        }
    }
}
