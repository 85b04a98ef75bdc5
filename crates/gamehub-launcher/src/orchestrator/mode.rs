//! Police mode and teardown.

use gamehub_common::PoliceMode;
use tracing::{info, warn};

use super::{notices, ActionOutcome, LaunchOrchestrator};

impl LaunchOrchestrator {
    /// Ask the backend to switch police mode. `police_mode_enabled` only
    /// changes once the backend acknowledges.
    pub async fn set_police_mode(&self, enabled: bool) -> ActionOutcome {
        let mode = PoliceMode::from_enabled(enabled);
        let result = self.inner.control.set_mode(mode).await;
        if self.inner.session.is_cancelled() {
            return ActionOutcome::Discarded;
        }

        match result {
            Ok(()) => {
                let before = self.inner.snapshot().police_mode_enabled;
                self.inner.apply(|s| s.police_mode_enabled = enabled);
                if before != enabled {
                    self.publish_trigger();
                }
                info!(enabled, "police mode confirmed");
                self.inner.notify(notices::police_mode(enabled));
                ActionOutcome::Completed
            }
            Err(e) => {
                warn!(enabled, error = %e, "police mode request failed");
                self.inner
                    .notify(notices::connection_error(&self.inner.config.service_label));
                ActionOutcome::Failed
            }
        }
    }

    /// Flip police mode relative to the last confirmed value.
    pub async fn toggle_police_mode(&self) -> ActionOutcome {
        let enabled = !self.inner.snapshot().police_mode_enabled;
        self.set_police_mode(enabled).await
    }

    /// Ask the backend to tear down games and monitoring. On success police
    /// mode is off and no game is active, whatever they were before.
    pub async fn close_all(&self) -> ActionOutcome {
        let result = self.inner.control.close_all().await;
        if self.inner.session.is_cancelled() {
            return ActionOutcome::Discarded;
        }

        match result {
            Ok(()) => {
                let before = self.inner.snapshot().police_mode_enabled;
                self.inner.apply(|s| {
                    s.police_mode_enabled = false;
                    s.active_game = None;
                });
                if before {
                    self.publish_trigger();
                }
                info!("games and monitoring closed");
                self.inner.notify(notices::closed());
                ActionOutcome::Completed
            }
            Err(e) => {
                warn!(error = %e, "close request failed");
                self.inner.notify(notices::close_failed());
                ActionOutcome::Failed
            }
        }
    }
}
