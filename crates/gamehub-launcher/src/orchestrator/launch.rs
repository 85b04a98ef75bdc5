//! Game launches, the decoy sequence, and the posture trigger.

use std::sync::Arc;

use gamehub_common::{GameId, LaunchTrigger};
use rand::seq::SliceRandom;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::{notices, ActionOutcome, Inner, LaunchOrchestrator};
use crate::trigger::TriggerOutcome;

impl LaunchOrchestrator {
    /// Request a launch of `game`.
    ///
    /// State changes that precede the network call (decoy entry, or the
    /// `loading_game`/`active_game` assignment) are applied before this
    /// returns. The request itself, and the decoy delay, run on the runtime;
    /// the handle resolves when they finish.
    ///
    /// Callers are expected to refuse new launches while
    /// [`LaunchState::is_busy`](crate::LaunchState::is_busy); nothing here
    /// serializes concurrent requests.
    pub fn request_launch(&self, game: GameId, trigger: LaunchTrigger) -> JoinHandle<ActionOutcome> {
        if self.inner.session.is_cancelled() {
            return self.inner.runtime.spawn(async { ActionOutcome::Discarded });
        }
        if trigger == LaunchTrigger::Manual && self.inner.config.is_decoy(game) {
            return self.start_decoy(game, trigger);
        }

        begin_launch(&self.inner, game, trigger);
        let inner = Arc::clone(&self.inner);
        self.inner
            .runtime
            .spawn(async move { finish_launch(&inner, game, trigger).await })
    }

    /// Detector entry point: launch a random game if police mode is on.
    pub(crate) fn handle_bad_posture(&self) -> TriggerOutcome {
        if !self.inner.snapshot().police_mode_enabled {
            debug!("bad posture reported but police mode is off");
            return TriggerOutcome::Ignored;
        }
        let Some(&game) = self.inner.config.game_ids.choose(&mut rand::thread_rng()) else {
            warn!("bad posture reported but no games are configured");
            return TriggerOutcome::Ignored;
        };
        info!(game = %game, "bad posture: launching a game");
        // Detached: the detector has no use for the outcome.
        drop(self.request_launch(game, LaunchTrigger::Automated));
        TriggerOutcome::Launched(game)
    }

    /// Show the decoy, then launch for real once the delay elapses. A newer
    /// decoy request cancels this one.
    fn start_decoy(&self, game: GameId, trigger: LaunchTrigger) -> JoinHandle<ActionOutcome> {
        let token = self.inner.session.child_token();
        // The flag is written under the slot lock so an expiring decoy
        // cannot clear it after a newer one has set it.
        let generation = {
            let mut slot = self.inner.decoy.lock().unwrap_or_else(|p| p.into_inner());
            if let Some(previous) = slot.token.replace(token.clone()) {
                debug!(superseded = slot.generation, "replacing pending decoy");
                previous.cancel();
            }
            slot.generation += 1;
            self.inner.apply(|s| s.decoy_in_progress = true);
            slot.generation
        };

        self.inner.notify(notices::decoy());
        info!(game = %game, delay_ms = self.inner.config.decoy_delay.as_millis() as u64, "decoy started");

        // Deadline is fixed now, not when the task is first polled.
        let deadline = tokio::time::Instant::now() + self.inner.config.decoy_delay;
        let inner = Arc::clone(&self.inner);
        self.inner.runtime.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    if inner.session.is_cancelled() {
                        ActionOutcome::Discarded
                    } else {
                        ActionOutcome::Superseded
                    }
                }
                _ = tokio::time::sleep_until(deadline) => {
                    if !end_decoy(&inner, generation, &token) {
                        return ActionOutcome::Superseded;
                    }
                    begin_launch(&inner, game, trigger);
                    finish_launch(&inner, game, trigger).await
                }
            }
        })
    }
}

/// Clear the decoy if `generation` is still the pending one.
fn end_decoy(inner: &Inner, generation: u64, token: &CancellationToken) -> bool {
    let mut slot = inner.decoy.lock().unwrap_or_else(|p| p.into_inner());
    if slot.generation != generation || token.is_cancelled() {
        return false;
    }
    slot.token = None;
    inner.apply(|s| s.decoy_in_progress = false);
    drop(slot);
    debug!(generation, "decoy finished");
    true
}

fn begin_launch(inner: &Inner, game: GameId, trigger: LaunchTrigger) {
    inner.apply(|s| {
        s.loading_game = Some(game);
        s.active_game = Some(game);
    });
    debug!(game = %game, trigger = ?trigger, "launch requested");
}

async fn finish_launch(inner: &Inner, game: GameId, trigger: LaunchTrigger) -> ActionOutcome {
    let result = inner.control.launch_game(game).await;

    // active_game stays forward-set on failure.
    if !inner.apply(|s| s.loading_game = None) {
        return ActionOutcome::Discarded;
    }

    let name = inner.config.game_name(game);
    match result {
        Ok(()) => {
            info!(game = %game, trigger = ?trigger, "game launched");
            inner.notify(notices::launched(trigger, &name));
            ActionOutcome::Completed
        }
        Err(e) => {
            warn!(game = %game, error = %e, category = ?e.category(), "game launch failed");
            inner.notify(notices::launch_failed(&inner.config.service_label));
            ActionOutcome::Failed
        }
    }
}
