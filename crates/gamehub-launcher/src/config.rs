use std::collections::HashMap;
use std::time::Duration;

use gamehub_common::GameId;
use gamehub_config::GameHubConfig;

/// Orchestrator parameters: the game catalog and the decoy sequence.
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    pub game_ids: Vec<GameId>,
    pub decoy_game: Option<GameId>,
    pub decoy_delay: Duration,
    pub game_names: HashMap<GameId, String>,
    /// Where the backend is, for error toasts.
    pub service_label: String,
}

impl LaunchConfig {
    pub fn new(game_ids: Vec<GameId>, decoy_game: Option<GameId>, decoy_delay: Duration) -> Self {
        Self {
            game_ids,
            decoy_game,
            decoy_delay,
            game_names: HashMap::new(),
            service_label: "the game control service".to_string(),
        }
    }

    pub fn from_config(config: &GameHubConfig) -> Self {
        let launcher = &config.launcher;
        Self {
            game_ids: launcher.game_ids(),
            decoy_game: launcher.decoy(),
            decoy_delay: Duration::from_millis(u64::from(launcher.decoy_delay_ms)),
            game_names: launcher
                .games
                .iter()
                .map(|g| (g.id, g.name.clone()))
                .collect(),
            service_label: config.service.base_url.clone(),
        }
    }

    pub fn with_game_name(mut self, id: GameId, name: impl Into<String>) -> Self {
        self.game_names.insert(id, name.into());
        self
    }

    pub fn game_name(&self, id: GameId) -> String {
        self.game_names
            .get(&id)
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }

    pub fn is_decoy(&self, id: GameId) -> bool {
        self.decoy_game == Some(id)
    }
}
