//! The launch orchestrator.
//!
//! State lives in a `watch` channel owned here; hosts subscribe for
//! snapshots and never write. Every network operation converts failure
//! into a toast and leaves state at its last confirmed value.

mod launch;
mod mode;
mod notices;

#[cfg(test)]
mod tests;

use std::sync::{Arc, Mutex};

use gamehub_common::{Notification, NotificationSink};
use gamehub_control::GameControl;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::config::LaunchConfig;
use crate::state::LaunchState;
use crate::trigger::TriggerPort;

/// How an orchestrator action ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The backend acknowledged and state was updated.
    Completed,
    /// The backend failed or refused; an error toast was shown.
    Failed,
    /// A newer decoy request replaced this one before it fired.
    Superseded,
    /// The orchestrator was shut down; nothing was applied.
    Discarded,
}

/// The pending decoy, if any.
#[derive(Default)]
struct DecoySlot {
    generation: u64,
    token: Option<CancellationToken>,
}

pub(crate) struct Inner {
    config: LaunchConfig,
    control: Arc<dyn GameControl>,
    sink: Arc<dyn NotificationSink>,
    state: watch::Sender<LaunchState>,
    trigger: TriggerPort,
    runtime: Handle,
    /// Cancelled by `shutdown`; parent of every decoy token.
    session: CancellationToken,
    decoy: Mutex<DecoySlot>,
}

impl Inner {
    /// Mutate state unless the orchestrator is shut down.
    fn apply(&self, f: impl FnOnce(&mut LaunchState)) -> bool {
        if self.session.is_cancelled() {
            debug!("state update dropped after shutdown");
            return false;
        }
        self.state.send_modify(f);
        true
    }

    fn notify(&self, notification: Notification) {
        if self.session.is_cancelled() {
            debug!(title = %notification.title, "notification dropped after shutdown");
            return;
        }
        self.sink.notify(notification);
    }

    fn snapshot(&self) -> LaunchState {
        *self.state.borrow()
    }
}

/// Cheap to clone; clones share one session.
#[derive(Clone)]
pub struct LaunchOrchestrator {
    inner: Arc<Inner>,
}

impl LaunchOrchestrator {
    /// Create the orchestrator and publish its posture trigger into `trigger`.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn new(
        config: LaunchConfig,
        control: Arc<dyn GameControl>,
        sink: Arc<dyn NotificationSink>,
        trigger: TriggerPort,
    ) -> Self {
        let (state, _) = watch::channel(LaunchState::default());
        let orchestrator = Self {
            inner: Arc::new(Inner {
                config,
                control,
                sink,
                state,
                trigger,
                runtime: Handle::current(),
                session: CancellationToken::new(),
                decoy: Mutex::new(DecoySlot::default()),
            }),
        };
        orchestrator.publish_trigger();
        info!(
            games = orchestrator.inner.config.game_ids.len(),
            decoy = ?orchestrator.inner.config.decoy_game,
            "launch orchestrator ready"
        );
        orchestrator
    }

    /// Current state snapshot.
    pub fn state(&self) -> LaunchState {
        self.inner.snapshot()
    }

    /// Receiver that observes every state change.
    pub fn subscribe(&self) -> watch::Receiver<LaunchState> {
        self.inner.state.subscribe()
    }

    pub fn config(&self) -> &LaunchConfig {
        &self.inner.config
    }

    /// Ask the backend's health endpoint whether it is up. Logs the result.
    pub async fn check_backend(&self) -> bool {
        match self.inner.control.health().await {
            Ok(()) => {
                info!(service = %self.inner.config.service_label, "game control service is up");
                true
            }
            Err(e) => {
                tracing::warn!(
                    service = %self.inner.config.service_label,
                    error = %e,
                    "game control service unreachable"
                );
                false
            }
        }
    }

    /// Stop applying results. In-flight requests still run to completion
    /// but their outcomes are discarded; a pending decoy is cancelled and
    /// the posture trigger is withdrawn.
    pub fn shutdown(&self) {
        if self.inner.session.is_cancelled() {
            return;
        }
        self.inner.session.cancel();
        self.inner.trigger.clear();
        info!("launch orchestrator shut down");
    }

    pub fn is_shut_down(&self) -> bool {
        self.inner.session.is_cancelled()
    }

    /// Replace the detector callback with one bound to this orchestrator.
    /// The callback reads live state, so it never acts on a stale toggle.
    fn publish_trigger(&self) {
        if self.inner.session.is_cancelled() {
            return;
        }
        let weak = Arc::downgrade(&self.inner);
        let generation = self.inner.trigger.publish(Arc::new(move || {
            match weak.upgrade() {
                Some(inner) => LaunchOrchestrator { inner }.handle_bad_posture(),
                None => crate::trigger::TriggerOutcome::Unregistered,
            }
        }));
        debug!(generation, "posture trigger published");
    }
}
