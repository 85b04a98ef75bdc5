//! GameControl trait implementation for HttpGameControl.

use async_trait::async_trait;
use gamehub_common::{new_correlation_id, GameId, PoliceMode};
use serde::Serialize;
use tracing::{debug, warn};

use crate::{ControlError, GameControl};

use super::client::{check_status, CloseRequest, GameRequest, HttpGameControl, ModeRequest};

impl HttpGameControl {
    async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<(), ControlError> {
        let url = self.endpoint(path);
        let cid = new_correlation_id();
        debug!(cid = %cid, url = %url, "game control request");

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ControlError::Transport(e.to_string()))?;

        let result = check_status(response).await;
        match &result {
            Ok(()) => debug!(cid = %cid, "game control request succeeded"),
            Err(e) => warn!(cid = %cid, url = %url, error = %e, "game control request failed"),
        }
        result
    }
}

#[async_trait]
impl GameControl for HttpGameControl {
    async fn launch_game(&self, game: GameId) -> Result<(), ControlError> {
        self.post("/game", &GameRequest { game: game.0 }).await
    }

    async fn set_mode(&self, mode: PoliceMode) -> Result<(), ControlError> {
        self.post(
            "/mode",
            &ModeRequest {
                mode: mode.wire_value(),
            },
        )
        .await
    }

    async fn close_all(&self) -> Result<(), ControlError> {
        self.post("/close", &CloseRequest { close: 1 }).await
    }

    async fn health(&self) -> Result<(), ControlError> {
        let url = self.endpoint("/health");
        debug!(url = %url, "game control health check");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ControlError::Transport(e.to_string()))?;
        check_status(response).await
    }
}
