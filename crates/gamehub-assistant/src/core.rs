//! The animator state machine, free of timers.
//!
//! Every input change re-arms the generators: the phase is re-selected,
//! the oscillators restart from rest and the generation counter moves on.
//! Tick handlers only mutate the current frame.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use gamehub_common::GameId;

use crate::messages;
use crate::oscillator::Oscillator;
use crate::phase::{AssistantInputs, Expression, Phase, PhaseProfile};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EyeOffset {
    pub x: f64,
    pub y: f64,
}

impl EyeOffset {
    /// Wandering pupils: `elapsed` since the assistant appeared.
    pub fn at(elapsed: Duration, period_ms: f64, amplitude: f64) -> Self {
        let t = elapsed.as_secs_f64() * 1000.0;
        Self {
            x: (t / period_ms).sin() * amplitude,
            y: (t / (period_ms * 0.8)).cos() * amplitude / 2.0,
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationFrame {
    pub phase: Phase,
    pub generation: u64,
    pub tilt_angle: f64,
    pub bounce_offset: f64,
    pub eye_offset: EyeOffset,
    pub wave_angle: f64,
    pub expression: Expression,
    pub message: &'static str,
}

pub struct AnimatorCore {
    tilt_master: GameId,
    inputs: AssistantInputs,
    welcome_active: bool,
    generation: u64,
    profile: PhaseProfile,
    tilt: Oscillator,
    bounce: Oscillator,
    wave_count: u32,
    idle_cursor: usize,
    frame: AnimationFrame,
    rng: StdRng,
}

impl AnimatorCore {
    pub fn new(tilt_master: GameId) -> Self {
        Self::with_rng(tilt_master, StdRng::from_entropy())
    }

    /// Deterministic message picks for tests.
    pub fn seeded(tilt_master: GameId, seed: u64) -> Self {
        Self::with_rng(tilt_master, StdRng::seed_from_u64(seed))
    }

    fn with_rng(tilt_master: GameId, rng: StdRng) -> Self {
        let phase = Phase::Welcome;
        let profile = phase.profile();
        let mut core = Self {
            tilt_master,
            inputs: AssistantInputs::default(),
            welcome_active: true,
            generation: 0,
            profile,
            tilt: Oscillator::symmetric(profile.tilt_speed, profile.tilt_range),
            bounce: Oscillator::positive(profile.bounce_speed, profile.bounce_range),
            wave_count: 0,
            idle_cursor: 0,
            frame: AnimationFrame {
                phase,
                generation: 0,
                tilt_angle: 0.0,
                bounce_offset: 0.0,
                eye_offset: EyeOffset::default(),
                wave_angle: 0.0,
                expression: phase.expression(),
                message: messages::IDLE[0],
            },
            rng,
        };
        core.rearm();
        core
    }

    pub fn frame(&self) -> &AnimationFrame {
        &self.frame
    }

    pub fn phase(&self) -> Phase {
        self.frame.phase
    }

    pub fn profile(&self) -> PhaseProfile {
        self.profile
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn welcome_active(&self) -> bool {
        self.welcome_active
    }

    /// Returns true if the inputs differ and the generators were re-armed.
    pub fn set_inputs(&mut self, inputs: AssistantInputs) -> bool {
        if inputs == self.inputs {
            return false;
        }
        self.inputs = inputs;
        self.rearm();
        true
    }

    /// End the welcome phase. It never reopens.
    pub fn close_welcome(&mut self) -> bool {
        if !self.welcome_active {
            return false;
        }
        self.welcome_active = false;
        self.rearm();
        true
    }

    fn rearm(&mut self) {
        let phase = Phase::select(&self.inputs, self.welcome_active, self.tilt_master);
        self.profile = phase.profile();
        self.tilt = Oscillator::symmetric(self.profile.tilt_speed, self.profile.tilt_range);
        self.bounce = Oscillator::positive(self.profile.bounce_speed, self.profile.bounce_range);
        self.wave_count = 0;
        self.idle_cursor = 0;
        self.generation += 1;

        self.frame.phase = phase;
        self.frame.generation = self.generation;
        self.frame.expression = phase.expression();
        debug!(phase = ?phase, generation = self.generation, "assistant re-armed");
    }

    pub fn tick_tilt(&mut self) {
        self.frame.tilt_angle = self.tilt.tick();
    }

    pub fn tick_bounce(&mut self) {
        self.frame.bounce_offset = self.bounce.tick();
    }

    pub fn tick_eye(&mut self, elapsed: Duration) {
        self.frame.eye_offset =
            EyeOffset::at(elapsed, self.profile.eye_period_ms, self.profile.eye_amplitude);
    }

    /// Only moves during the welcome phase; elsewhere the arm stays put.
    pub fn tick_wave(&mut self) {
        if !self.phase().is_welcome() {
            return;
        }
        self.wave_count = self.wave_count.wrapping_add(1);
        self.frame.wave_angle = (f64::from(self.wave_count) * 0.3).sin() * 20.0;
    }

    /// Idle cycles its pool in order; every other phase picks at random.
    pub fn tick_message(&mut self) {
        let pool: &'static [&'static str] = match self.phase() {
            Phase::Idle => {
                self.idle_cursor = (self.idle_cursor + 1) % messages::IDLE.len();
                self.frame.message = messages::IDLE[self.idle_cursor];
                return;
            }
            Phase::Welcome => messages::WELCOME,
            Phase::TiltMaster => messages::TILT_MASTER,
            Phase::Loading(game) => messages::loading(game),
            Phase::Hover(game) => messages::hover(game),
        };
        if let Some(message) = pool.choose(&mut self.rng) {
            self.frame.message = message;
        }
    }
}
