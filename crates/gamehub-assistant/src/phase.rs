//! Phase selection and the per-phase motion profile.

use std::time::Duration;

use gamehub_common::GameId;

/// The slice of launcher state the assistant reacts to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssistantInputs {
    pub hovered_game: Option<GameId>,
    pub loading_game: Option<GameId>,
    pub active_game: Option<GameId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Welcome,
    TiltMaster,
    Loading(GameId),
    Hover(GameId),
    Idle,
}

impl Phase {
    /// First match wins: welcome, the tilt-master game being active, a
    /// loading game, a hovered game, otherwise idle.
    pub fn select(inputs: &AssistantInputs, welcome_active: bool, tilt_master: GameId) -> Self {
        if welcome_active {
            Phase::Welcome
        } else if inputs.active_game == Some(tilt_master) {
            Phase::TiltMaster
        } else if let Some(game) = inputs.loading_game {
            Phase::Loading(game)
        } else if let Some(game) = inputs.hovered_game {
            Phase::Hover(game)
        } else {
            Phase::Idle
        }
    }

    pub fn expression(self) -> Expression {
        match self {
            Phase::TiltMaster => Expression::SuperExcited,
            Phase::Welcome | Phase::Loading(_) | Phase::Hover(_) => Expression::Excited,
            Phase::Idle => Expression::Happy,
        }
    }

    pub fn profile(self) -> PhaseProfile {
        match self {
            Phase::Idle => PhaseProfile {
                tilt_speed: 2.0,
                tilt_range: 15.0,
                bounce_speed: 0.4,
                bounce_range: 4.0,
                eye_period_ms: 1000.0,
                eye_amplitude: 2.0,
                message_interval: Duration::from_millis(3000),
            },
            Phase::Hover(_) | Phase::Loading(_) => PhaseProfile {
                tilt_speed: 2.5,
                tilt_range: 20.0,
                bounce_speed: 0.5,
                bounce_range: 5.0,
                eye_period_ms: 1000.0,
                eye_amplitude: 2.0,
                message_interval: Duration::from_millis(2500),
            },
            Phase::Welcome => PhaseProfile {
                tilt_speed: 3.5,
                tilt_range: 25.0,
                bounce_speed: 0.8,
                bounce_range: 8.0,
                eye_period_ms: 1000.0,
                eye_amplitude: 2.0,
                message_interval: Duration::from_millis(1500),
            },
            Phase::TiltMaster => PhaseProfile {
                tilt_speed: 4.5,
                tilt_range: 35.0,
                bounce_speed: 1.2,
                bounce_range: 10.0,
                eye_period_ms: 500.0,
                eye_amplitude: 4.0,
                message_interval: Duration::from_millis(2000),
            },
        }
    }

    pub fn is_welcome(self) -> bool {
        matches!(self, Phase::Welcome)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expression {
    Happy,
    Excited,
    SuperExcited,
}

/// Motion parameters for one phase. Tilt and bounce are in degrees and
/// pixels per tick; the eye period is in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseProfile {
    pub tilt_speed: f64,
    pub tilt_range: f64,
    pub bounce_speed: f64,
    pub bounce_range: f64,
    pub eye_period_ms: f64,
    pub eye_amplitude: f64,
    pub message_interval: Duration,
}
