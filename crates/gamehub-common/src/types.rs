use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a launchable game, as understood by the Game Control Service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u8);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "game-{}", self.0)
    }
}

/// Who asked for a launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchTrigger {
    /// A user picked the game.
    Manual,
    /// The posture detector fired while police mode was on.
    Automated,
}

/// Police mode as sent to the `/mode` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoliceMode {
    Off,
    On,
}

impl PoliceMode {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            PoliceMode::On
        } else {
            PoliceMode::Off
        }
    }

    /// Value of the `mode` field on the wire: `1` enables, `0` disables.
    pub fn wire_value(self) -> u8 {
        match self {
            PoliceMode::Off => 0,
            PoliceMode::On => 1,
        }
    }
}
