//! Timer-driven wrapper around [`AnimatorCore`].
//!
//! One task owns the core and every interval. Re-arming replaces the
//! intervals inside the same `select!` loop, so a tick from a previous
//! phase can never land after the switch.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::config::AssistantTiming;
use crate::core::{AnimationFrame, AnimatorCore};
use crate::phase::AssistantInputs;

pub struct AssistantAnimator;

impl AssistantAnimator {
    /// Start animating on the current runtime. The task follows `inputs`
    /// until the handle is stopped or dropped, or the sender goes away.
    pub fn spawn(timing: AssistantTiming, inputs: watch::Receiver<AssistantInputs>) -> AnimatorHandle {
        Self::spawn_with(AnimatorCore::new(timing.tilt_master_game), timing, inputs)
    }

    pub fn spawn_with(
        core: AnimatorCore,
        timing: AssistantTiming,
        inputs: watch::Receiver<AssistantInputs>,
    ) -> AnimatorHandle {
        let (frames, frames_rx) = watch::channel(core.frame().clone());
        let stop = CancellationToken::new();
        let task = tokio::spawn(run(core, timing, inputs, frames, stop.clone()));
        AnimatorHandle {
            frames: frames_rx,
            stop,
            task: Some(task),
        }
    }
}

pub struct AnimatorHandle {
    frames: watch::Receiver<AnimationFrame>,
    stop: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl AnimatorHandle {
    pub fn frames(&self) -> watch::Receiver<AnimationFrame> {
        self.frames.clone()
    }

    /// Latest frame.
    pub fn frame(&self) -> AnimationFrame {
        self.frames.borrow().clone()
    }

    /// Cancel every timer and wait for the task to exit.
    pub async fn stop(mut self) {
        self.stop.cancel();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for AnimatorHandle {
    fn drop(&mut self) {
        self.stop.cancel();
    }
}

struct Generators {
    tilt: Interval,
    bounce: Interval,
    eye: Interval,
    message: Interval,
    wave: Interval,
}

impl Generators {
    fn arm(timing: &AssistantTiming, core: &AnimatorCore) -> Self {
        Self {
            tilt: ticker(timing.tilt_tick),
            bounce: ticker(timing.bounce_tick),
            eye: ticker(timing.eye_tick),
            message: ticker(core.profile().message_interval),
            wave: ticker(timing.wave_tick),
        }
    }
}

/// First tick one period from now.
fn ticker(period: Duration) -> Interval {
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    interval
}

async fn run(
    mut core: AnimatorCore,
    timing: AssistantTiming,
    mut inputs: watch::Receiver<AssistantInputs>,
    frames: watch::Sender<AnimationFrame>,
    stop: CancellationToken,
) {
    let mounted = Instant::now();
    let welcome = tokio::time::sleep(timing.welcome);
    tokio::pin!(welcome);

    let initial = *inputs.borrow_and_update();
    core.set_inputs(initial);
    let mut gens = Generators::arm(&timing, &core);
    frames.send_replace(core.frame().clone());
    info!(phase = ?core.phase(), "assistant started");

    loop {
        let waving = core.phase().is_welcome();
        tokio::select! {
            _ = stop.cancelled() => break,
            changed = inputs.changed() => {
                if changed.is_err() {
                    debug!("assistant inputs closed");
                    break;
                }
                let next = *inputs.borrow_and_update();
                if core.set_inputs(next) {
                    gens = Generators::arm(&timing, &core);
                }
            }
            _ = &mut welcome, if core.welcome_active() => {
                core.close_welcome();
                gens = Generators::arm(&timing, &core);
            }
            _ = gens.tilt.tick() => core.tick_tilt(),
            _ = gens.bounce.tick() => core.tick_bounce(),
            _ = gens.eye.tick() => core.tick_eye(mounted.elapsed()),
            _ = gens.message.tick() => core.tick_message(),
            _ = gens.wave.tick(), if waving => core.tick_wave(),
        }
        frames.send_replace(core.frame().clone());
    }
    info!("assistant stopped");
}
