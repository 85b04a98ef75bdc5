//! Client for the Game Control Service.
//!
//! The service is a small local HTTP backend that starts and stops games
//! and the camera-based posture monitor. Only status codes are part of its
//! contract; response bodies are ignored.

pub mod http;

use async_trait::async_trait;
use gamehub_common::{GameId, PoliceMode};

pub use http::HttpGameControl;

#[async_trait]
pub trait GameControl: Send + Sync {
    /// `POST /game` with `{ "game": <id> }`.
    async fn launch_game(&self, game: GameId) -> Result<(), ControlError>;

    /// `POST /mode` with `{ "mode": 0 | 1 }`.
    async fn set_mode(&self, mode: PoliceMode) -> Result<(), ControlError>;

    /// `POST /close` with `{ "close": 1 }`.
    async fn close_all(&self) -> Result<(), ControlError>;

    /// `GET /health`.
    async fn health(&self) -> Result<(), ControlError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("service rejected request: HTTP {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("invalid service url: {0}")]
    InvalidUrl(String),
}

/// What the user gets told. Backend down and backend refusing look the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCategory {
    Unreachable,
    Misconfigured,
}

impl ControlError {
    pub fn category(&self) -> FailureCategory {
        match self {
            ControlError::Transport(_) | ControlError::Rejected { .. } => {
                FailureCategory::Unreachable
            }
            ControlError::InvalidUrl(_) => FailureCategory::Misconfigured,
        }
    }
}
