//! Orchestrator tests against a scripted Game Control Service.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use gamehub_common::{GameId, LaunchTrigger, NotificationLevel, NotificationQueue, PoliceMode};
use gamehub_control::{ControlError, GameControl};
use tokio::sync::Notify;

use super::notices::{AUTOMATED_TITLE, DECOY_TITLE, LAUNCHED_TITLE};
use super::{ActionOutcome, LaunchOrchestrator};
use crate::config::LaunchConfig;
use crate::state::LaunchState;
use crate::trigger::{TriggerOutcome, TriggerPort};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Call {
    Launch(GameId),
    Mode(PoliceMode),
    Close,
    Health,
}

/// Records calls; fails when told to; optionally holds each call until released.
#[derive(Default)]
struct ScriptedControl {
    calls: Mutex<Vec<Call>>,
    fail: AtomicBool,
    hold: Mutex<Option<Arc<Notify>>>,
}

impl ScriptedControl {
    fn failing() -> Self {
        let control = Self::default();
        control.fail.store(true, Ordering::SeqCst);
        control
    }

    fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Hold every subsequent call until the returned gate is notified.
    fn gate(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.hold.lock().unwrap() = Some(Arc::clone(&gate));
        gate
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    async fn respond(&self, call: Call) -> Result<(), ControlError> {
        self.calls.lock().unwrap().push(call);
        let gate = self.hold.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if self.fail.load(Ordering::SeqCst) {
            Err(ControlError::Transport("connection refused".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl GameControl for ScriptedControl {
    async fn launch_game(&self, game: GameId) -> Result<(), ControlError> {
        self.respond(Call::Launch(game)).await
    }

    async fn set_mode(&self, mode: PoliceMode) -> Result<(), ControlError> {
        self.respond(Call::Mode(mode)).await
    }

    async fn close_all(&self) -> Result<(), ControlError> {
        self.respond(Call::Close).await
    }

    async fn health(&self) -> Result<(), ControlError> {
        self.respond(Call::Health).await
    }
}

struct Harness {
    orchestrator: LaunchOrchestrator,
    control: Arc<ScriptedControl>,
    toasts: Arc<Mutex<NotificationQueue>>,
    port: TriggerPort,
}

impl Harness {
    fn new(control: ScriptedControl) -> Self {
        let config = LaunchConfig::new(
            vec![GameId(0), GameId(1)],
            Some(GameId(1)),
            Duration::from_millis(3000),
        )
        .with_game_name(GameId(0), "Traffic Rush")
        .with_game_name(GameId(1), "Tilt Master");
        Self::with_config(config, control)
    }

    fn with_config(config: LaunchConfig, control: ScriptedControl) -> Self {
        let control = Arc::new(control);
        let toasts = Arc::new(Mutex::new(NotificationQueue::new(64)));
        let port = TriggerPort::new();
        let orchestrator = LaunchOrchestrator::new(
            config,
            Arc::clone(&control) as Arc<dyn GameControl>,
            Arc::clone(&toasts) as Arc<dyn gamehub_common::NotificationSink>,
            port.clone(),
        );
        Self {
            orchestrator,
            control,
            toasts,
            port,
        }
    }

    /// Drain toasts as (level, title, body).
    fn toasts(&self) -> Vec<(NotificationLevel, String, String)> {
        self.toasts
            .lock()
            .unwrap()
            .drain()
            .into_iter()
            .map(|n| (n.level, n.title, n.body))
            .collect()
    }

    fn titles(&self) -> Vec<String> {
        self.toasts().into_iter().map(|(_, title, _)| title).collect()
    }
}

async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

// ---------------------------------------------------------------------------
// Launches
// ---------------------------------------------------------------------------

#[tokio::test]
async fn manual_launch_sets_loading_before_request_and_clears_after() {
    let h = Harness::new(ScriptedControl::default());

    let handle = h.orchestrator.request_launch(GameId(0), LaunchTrigger::Manual);
    let state = h.orchestrator.state();
    assert_eq!(state.loading_game, Some(GameId(0)));
    assert_eq!(state.active_game, Some(GameId(0)));

    assert_eq!(handle.await.unwrap(), ActionOutcome::Completed);
    let state = h.orchestrator.state();
    assert_eq!(state.loading_game, None);
    assert_eq!(state.active_game, Some(GameId(0)));
    assert_eq!(h.control.calls(), vec![Call::Launch(GameId(0))]);

    let toasts = h.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].0, NotificationLevel::Info);
    assert_eq!(toasts[0].1, LAUNCHED_TITLE);
    assert_eq!(toasts[0].2, "Traffic Rush is starting...");
}

#[tokio::test]
async fn loading_stays_set_while_request_is_pending() {
    let control = ScriptedControl::default();
    let gate = control.gate();
    let h = Harness::new(control);

    let handle = h.orchestrator.request_launch(GameId(0), LaunchTrigger::Manual);
    settle().await;
    assert_eq!(h.control.calls(), vec![Call::Launch(GameId(0))]);
    assert_eq!(h.orchestrator.state().loading_game, Some(GameId(0)));
    assert!(h.orchestrator.state().is_busy());

    gate.notify_one();
    assert_eq!(handle.await.unwrap(), ActionOutcome::Completed);
    assert_eq!(h.orchestrator.state().loading_game, None);
}

#[tokio::test]
async fn failed_launch_clears_loading_and_keeps_active_game() {
    let h = Harness::new(ScriptedControl::failing());

    let handle = h.orchestrator.request_launch(GameId(0), LaunchTrigger::Manual);
    assert_eq!(h.orchestrator.state().loading_game, Some(GameId(0)));
    assert_eq!(handle.await.unwrap(), ActionOutcome::Failed);

    let state = h.orchestrator.state();
    assert_eq!(state.loading_game, None);
    assert_eq!(state.active_game, Some(GameId(0)));

    let toasts = h.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].0, NotificationLevel::Error);
    assert_eq!(toasts[0].1, "Error");
}

#[tokio::test]
async fn automated_launch_uses_distinct_toast() {
    let h = Harness::new(ScriptedControl::default());

    let outcome = h
        .orchestrator
        .request_launch(GameId(0), LaunchTrigger::Automated)
        .await
        .unwrap();
    assert_eq!(outcome, ActionOutcome::Completed);

    let toasts = h.toasts();
    assert_eq!(toasts[0].0, NotificationLevel::Warning);
    assert_eq!(toasts[0].1, AUTOMATED_TITLE);
    assert!(toasts[0].2.contains("Traffic Rush"));
}

#[tokio::test]
async fn state_changes_are_observable_through_subscribe() {
    let h = Harness::new(ScriptedControl::default());
    let mut rx = h.orchestrator.subscribe();

    let handle = h.orchestrator.request_launch(GameId(0), LaunchTrigger::Manual);
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().loading_game, Some(GameId(0)));

    handle.await.unwrap();
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow().loading_game, None);
}

// ---------------------------------------------------------------------------
// Decoy
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn decoy_defers_the_real_launch() {
    let h = Harness::new(ScriptedControl::default());

    let handle = h.orchestrator.request_launch(GameId(1), LaunchTrigger::Manual);
    let state = h.orchestrator.state();
    assert!(state.decoy_in_progress);
    assert_eq!(state.loading_game, None);
    assert_eq!(h.titles(), vec![DECOY_TITLE.to_string()]);

    tokio::time::advance(Duration::from_millis(2999)).await;
    settle().await;
    assert!(h.control.calls().is_empty());
    assert!(h.orchestrator.state().decoy_in_progress);

    assert_eq!(handle.await.unwrap(), ActionOutcome::Completed);
    let state = h.orchestrator.state();
    assert!(!state.decoy_in_progress);
    assert_eq!(state.active_game, Some(GameId(1)));
    assert_eq!(h.control.calls(), vec![Call::Launch(GameId(1))]);

    let toasts = h.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].1, LAUNCHED_TITLE);
    assert_eq!(toasts[0].2, "Tilt Master is starting...");
}

#[tokio::test(start_paused = true)]
async fn decoy_keeps_automated_flag_off_for_manual_request() {
    let h = Harness::new(ScriptedControl::default());
    h.orchestrator
        .request_launch(GameId(1), LaunchTrigger::Manual)
        .await
        .unwrap();

    let toasts = h.toasts();
    assert_eq!(toasts.last().unwrap().1, LAUNCHED_TITLE);
}

#[tokio::test]
async fn automated_request_bypasses_decoy() {
    let h = Harness::new(ScriptedControl::default());

    let handle = h
        .orchestrator
        .request_launch(GameId(1), LaunchTrigger::Automated);
    let state = h.orchestrator.state();
    assert!(!state.decoy_in_progress);
    assert_eq!(state.loading_game, Some(GameId(1)));

    assert_eq!(handle.await.unwrap(), ActionOutcome::Completed);
    assert_eq!(h.control.calls(), vec![Call::Launch(GameId(1))]);
    assert!(!h.titles().contains(&DECOY_TITLE.to_string()));
}

#[tokio::test(start_paused = true)]
async fn newer_decoy_supersedes_pending_one() {
    let h = Harness::new(ScriptedControl::default());

    let first = h.orchestrator.request_launch(GameId(1), LaunchTrigger::Manual);
    tokio::time::advance(Duration::from_millis(1000)).await;
    let second = h.orchestrator.request_launch(GameId(1), LaunchTrigger::Manual);

    assert_eq!(first.await.unwrap(), ActionOutcome::Superseded);
    assert!(h.orchestrator.state().decoy_in_progress);

    // The first deadline passes without a launch.
    tokio::time::advance(Duration::from_millis(2500)).await;
    settle().await;
    assert!(h.control.calls().is_empty());

    assert_eq!(second.await.unwrap(), ActionOutcome::Completed);
    assert_eq!(h.control.calls(), vec![Call::Launch(GameId(1))]);
    assert!(!h.orchestrator.state().decoy_in_progress);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn decoy_requested_at_the_old_deadline_stays_in_progress() {
    let config = LaunchConfig::new(
        vec![GameId(0), GameId(1)],
        Some(GameId(1)),
        Duration::from_millis(5),
    );
    let h = Harness::with_config(config, ScriptedControl::default());

    for _ in 0..50 {
        let first = h.orchestrator.request_launch(GameId(1), LaunchTrigger::Manual);
        tokio::time::sleep(Duration::from_millis(5)).await;
        let second = h.orchestrator.request_launch(GameId(1), LaunchTrigger::Manual);
        // Whether or not the first decoy already expired, the second one
        // is pending until its own deadline.
        assert!(h.orchestrator.state().decoy_in_progress);

        first.await.unwrap();
        assert_eq!(second.await.unwrap(), ActionOutcome::Completed);
        assert!(!h.orchestrator.state().is_busy());
    }
}

#[tokio::test(start_paused = true)]
async fn decoy_fires_even_if_police_mode_changes_meanwhile() {
    let h = Harness::new(ScriptedControl::default());

    let handle = h.orchestrator.request_launch(GameId(1), LaunchTrigger::Manual);
    h.orchestrator.set_police_mode(true).await;
    h.orchestrator.set_police_mode(false).await;

    assert_eq!(handle.await.unwrap(), ActionOutcome::Completed);
    assert_eq!(
        h.control.calls(),
        vec![
            Call::Mode(PoliceMode::On),
            Call::Mode(PoliceMode::Off),
            Call::Launch(GameId(1)),
        ]
    );
}

#[tokio::test]
async fn no_decoy_when_unconfigured() {
    let config = LaunchConfig::new(vec![GameId(0), GameId(1)], None, Duration::from_secs(3));
    let h = Harness::with_config(config, ScriptedControl::default());

    let handle = h.orchestrator.request_launch(GameId(1), LaunchTrigger::Manual);
    assert!(!h.orchestrator.state().decoy_in_progress);
    assert_eq!(h.orchestrator.state().loading_game, Some(GameId(1)));
    assert_eq!(handle.await.unwrap(), ActionOutcome::Completed);
}

// ---------------------------------------------------------------------------
// Police mode
// ---------------------------------------------------------------------------

#[tokio::test]
async fn police_mode_stays_off_when_request_fails() {
    let h = Harness::new(ScriptedControl::failing());

    assert_eq!(h.orchestrator.set_police_mode(true).await, ActionOutcome::Failed);
    assert!(!h.orchestrator.state().police_mode_enabled);

    let toasts = h.toasts();
    assert_eq!(toasts[0].0, NotificationLevel::Error);
    assert_eq!(toasts[0].1, "Connection Error");
}

#[tokio::test]
async fn police_mode_is_never_ahead_of_the_backend() {
    let control = ScriptedControl::default();
    let gate = control.gate();
    let h = Harness::new(control);

    let orchestrator = h.orchestrator.clone();
    let pending = tokio::spawn(async move { orchestrator.set_police_mode(true).await });
    settle().await;
    assert_eq!(h.control.calls(), vec![Call::Mode(PoliceMode::On)]);
    assert!(!h.orchestrator.state().police_mode_enabled);

    gate.notify_one();
    assert_eq!(pending.await.unwrap(), ActionOutcome::Completed);
    assert!(h.orchestrator.state().police_mode_enabled);
    assert_eq!(h.titles(), vec!["Police Mode ON".to_string()]);
}

#[tokio::test]
async fn failed_disable_keeps_police_mode_on() {
    let h = Harness::new(ScriptedControl::default());
    h.orchestrator.set_police_mode(true).await;

    h.control.set_failing(true);
    assert_eq!(h.orchestrator.set_police_mode(false).await, ActionOutcome::Failed);
    assert!(h.orchestrator.state().police_mode_enabled);
}

#[tokio::test]
async fn toggle_flips_confirmed_value() {
    let h = Harness::new(ScriptedControl::default());
    h.orchestrator.toggle_police_mode().await;
    assert!(h.orchestrator.state().police_mode_enabled);
    h.orchestrator.toggle_police_mode().await;
    assert!(!h.orchestrator.state().police_mode_enabled);
    assert_eq!(
        h.control.calls(),
        vec![Call::Mode(PoliceMode::On), Call::Mode(PoliceMode::Off)]
    );
}

// ---------------------------------------------------------------------------
// Posture trigger
// ---------------------------------------------------------------------------

#[tokio::test]
async fn trigger_is_noop_while_police_mode_is_off() {
    let h = Harness::new(ScriptedControl::default());

    assert_eq!(h.port.fire(), TriggerOutcome::Ignored);
    settle().await;
    assert!(h.control.calls().is_empty());
    assert_eq!(h.orchestrator.state(), LaunchState::default());
}

#[tokio::test]
async fn trigger_launches_random_games_when_police_mode_is_on() {
    let h = Harness::new(ScriptedControl::default());
    h.orchestrator.set_police_mode(true).await;

    let mut seen = HashSet::new();
    for _ in 0..64 {
        match h.port.fire() {
            TriggerOutcome::Launched(game) => {
                assert!(game == GameId(0) || game == GameId(1));
                seen.insert(game);
            }
            other => panic!("expected a launch, got {other:?}"),
        }
    }
    assert_eq!(seen.len(), 2);

    settle().await;
    let launches = h
        .control
        .calls()
        .into_iter()
        .filter(|c| matches!(c, Call::Launch(_)))
        .count();
    assert_eq!(launches, 64);
    // Automated launches never play the decoy.
    assert!(!h.titles().contains(&DECOY_TITLE.to_string()));
}

#[tokio::test]
async fn trigger_is_republished_on_confirmed_changes_only() {
    let h = Harness::new(ScriptedControl::default());
    let initial = h.port.generation();
    assert_eq!(initial, 1);

    h.orchestrator.set_police_mode(true).await;
    assert_eq!(h.port.generation(), initial + 1);

    // Re-confirming the same value does not republish.
    h.orchestrator.set_police_mode(true).await;
    assert_eq!(h.port.generation(), initial + 1);

    h.control.set_failing(true);
    h.orchestrator.set_police_mode(false).await;
    assert_eq!(h.port.generation(), initial + 1);
    assert!(matches!(h.port.fire(), TriggerOutcome::Launched(_)));

    h.control.set_failing(false);
    h.orchestrator.set_police_mode(false).await;
    assert_eq!(h.port.generation(), initial + 2);
    assert_eq!(h.port.fire(), TriggerOutcome::Ignored);
}

#[tokio::test]
async fn trigger_reports_unregistered_after_orchestrator_is_dropped() {
    let h = Harness::new(ScriptedControl::default());
    let port = h.port.clone();
    drop(h);
    assert_eq!(port.fire(), TriggerOutcome::Unregistered);
}

// ---------------------------------------------------------------------------
// Close
// ---------------------------------------------------------------------------

#[tokio::test]
async fn close_all_resets_police_mode_and_active_game() {
    let h = Harness::new(ScriptedControl::default());
    h.orchestrator.set_police_mode(true).await;
    h.orchestrator
        .request_launch(GameId(0), LaunchTrigger::Manual)
        .await
        .unwrap();
    h.toasts();

    assert_eq!(h.orchestrator.close_all().await, ActionOutcome::Completed);
    let state = h.orchestrator.state();
    assert!(!state.police_mode_enabled);
    assert_eq!(state.active_game, None);
    assert_eq!(h.titles(), vec!["All Closed".to_string()]);
    assert_eq!(h.port.fire(), TriggerOutcome::Ignored);
}

#[tokio::test]
async fn close_all_failure_leaves_state_unchanged() {
    let h = Harness::new(ScriptedControl::default());
    h.orchestrator.set_police_mode(true).await;
    h.orchestrator
        .request_launch(GameId(0), LaunchTrigger::Manual)
        .await
        .unwrap();
    let before = h.orchestrator.state();

    h.control.set_failing(true);
    assert_eq!(h.orchestrator.close_all().await, ActionOutcome::Failed);
    assert_eq!(h.orchestrator.state(), before);
}

#[tokio::test]
async fn close_all_is_idempotent() {
    let h = Harness::new(ScriptedControl::default());
    assert_eq!(h.orchestrator.close_all().await, ActionOutcome::Completed);
    assert_eq!(h.orchestrator.close_all().await, ActionOutcome::Completed);
    assert_eq!(h.orchestrator.state(), LaunchState::default());
    assert_eq!(h.control.calls(), vec![Call::Close, Call::Close]);
}

// ---------------------------------------------------------------------------
// Shutdown and health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn shutdown_discards_in_flight_results() {
    let control = ScriptedControl::default();
    let gate = control.gate();
    let h = Harness::new(control);

    let handle = h.orchestrator.request_launch(GameId(0), LaunchTrigger::Manual);
    settle().await;
    h.orchestrator.shutdown();
    assert!(h.orchestrator.is_shut_down());

    gate.notify_one();
    assert_eq!(handle.await.unwrap(), ActionOutcome::Discarded);
    // The request still went out; its result was not applied.
    assert_eq!(h.control.calls(), vec![Call::Launch(GameId(0))]);
    assert_eq!(h.orchestrator.state().loading_game, Some(GameId(0)));
    assert!(h.toasts().is_empty());
    assert_eq!(h.port.fire(), TriggerOutcome::Unregistered);
}

#[tokio::test(start_paused = true)]
async fn shutdown_cancels_pending_decoy() {
    let h = Harness::new(ScriptedControl::default());
    let handle = h.orchestrator.request_launch(GameId(1), LaunchTrigger::Manual);
    h.orchestrator.shutdown();

    assert_eq!(handle.await.unwrap(), ActionOutcome::Discarded);
    tokio::time::advance(Duration::from_secs(5)).await;
    settle().await;
    assert!(h.control.calls().is_empty());
}

#[tokio::test]
async fn requests_after_shutdown_are_discarded() {
    let h = Harness::new(ScriptedControl::default());
    h.orchestrator.shutdown();

    let outcome = h
        .orchestrator
        .request_launch(GameId(0), LaunchTrigger::Manual)
        .await
        .unwrap();
    assert_eq!(outcome, ActionOutcome::Discarded);
    assert!(h.control.calls().is_empty());
}

#[tokio::test]
async fn check_backend_reports_health() {
    let h = Harness::new(ScriptedControl::default());
    assert!(h.orchestrator.check_backend().await);

    h.control.set_failing(true);
    assert!(!h.orchestrator.check_backend().await);
    assert_eq!(h.control.calls(), vec![Call::Health, Call::Health]);
}
