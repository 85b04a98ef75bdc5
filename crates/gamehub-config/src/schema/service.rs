//! Game Control Service connection settings.

use serde::{Deserialize, Serialize};

/// Where the Game Control Service lives and how long to wait for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub base_url: String,
    /// Valid range: 100-60000.
    pub connect_timeout_ms: u32,
    /// Valid range: 100-120000.
    pub request_timeout_ms: u32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:2301".to_string(),
            connect_timeout_ms: 2000,
            request_timeout_ms: 10_000,
        }
    }
}
