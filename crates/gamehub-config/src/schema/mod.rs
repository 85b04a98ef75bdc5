//! Configuration schema types for Game Hub.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod assistant;
mod launcher;
mod service;
mod system;

pub use assistant::*;
pub use launcher::*;
pub use service::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Game Hub.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GameHubConfig {
    pub service: ServiceConfig,
    pub launcher: LauncherConfig,
    pub assistant: AssistantConfig,
    pub logging: LoggingConfig,
}
