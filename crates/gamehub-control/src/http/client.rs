//! HTTP client struct, endpoint building, and response checking.

use std::time::Duration;

use gamehub_config::schema::ServiceConfig;
use serde::Serialize;

use crate::ControlError;

/// Response bodies are kept this long in error messages.
const ERROR_BODY_LIMIT: usize = 200;

#[derive(Debug, Serialize)]
pub(crate) struct GameRequest {
    pub(crate) game: u8,
}

#[derive(Debug, Serialize)]
pub(crate) struct ModeRequest {
    pub(crate) mode: u8,
}

#[derive(Debug, Serialize)]
pub(crate) struct CloseRequest {
    pub(crate) close: u8,
}

/// Game Control Service client.
#[derive(Debug, Clone)]
pub struct HttpGameControl {
    pub(crate) base_url: String,
    pub(crate) http: reqwest::Client,
}

impl HttpGameControl {
    pub fn new(
        base_url: &str,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, ControlError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url)
            .map_err(|e| ControlError::InvalidUrl(format!("{base_url}: {e}")))?;

        let http = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|e| ControlError::Transport(e.to_string()))?;

        Ok(Self { base_url, http })
    }

    pub fn from_config(config: &ServiceConfig) -> Result<Self, ControlError> {
        Self::new(
            &config.base_url,
            Duration::from_millis(u64::from(config.connect_timeout_ms)),
            Duration::from_millis(u64::from(config.request_timeout_ms)),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Map a non-2xx response to `Rejected`. The body is drained either way.
pub(crate) async fn check_status(response: reqwest::Response) -> Result<(), ControlError> {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    if status.is_success() {
        return Ok(());
    }
    Err(ControlError::Rejected {
        status: status.as_u16(),
        body: text.chars().take(ERROR_BODY_LIMIT).collect(),
    })
}
