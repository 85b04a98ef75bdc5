//! Launcher configuration: the game catalog and the decoy sequence.

use gamehub_common::GameId;
use serde::{Deserialize, Serialize};

/// One launchable game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEntry {
    pub id: GameId,
    pub name: String,
}

/// Launcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    pub games: Vec<GameEntry>,
    /// Play the decoy sequence before manual launches of `decoy_game`.
    pub decoy_enabled: bool,
    pub decoy_game: GameId,
    /// Valid range: 0-60000.
    pub decoy_delay_ms: u32,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            games: vec![
                GameEntry {
                    id: GameId(0),
                    name: "Traffic Rush".to_string(),
                },
                GameEntry {
                    id: GameId(1),
                    name: "Tilt Master".to_string(),
                },
            ],
            decoy_enabled: true,
            decoy_game: GameId(1),
            decoy_delay_ms: 3000,
        }
    }
}

impl LauncherConfig {
    /// Configured game ids in catalog order.
    pub fn game_ids(&self) -> Vec<GameId> {
        self.games.iter().map(|g| g.id).collect()
    }

    /// The decoy game, if the decoy sequence is enabled.
    pub fn decoy(&self) -> Option<GameId> {
        self.decoy_enabled.then_some(self.decoy_game)
    }
}
