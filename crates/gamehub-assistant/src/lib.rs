//! The animated assistant.
//!
//! A purely derived presentation: it samples the launcher's observable
//! state (hover, loading, active game) and produces tilt, bounce, eye
//! wander, expression and speech on fixed cadences. It never writes back.
//!
//! [`AnimatorCore`] is the synchronous state machine; [`AssistantAnimator`]
//! drives it from Tokio timers.

pub mod config;
pub mod core;
pub mod driver;
pub mod messages;
pub mod oscillator;
pub mod phase;

pub use config::AssistantTiming;
pub use core::{AnimationFrame, AnimatorCore, EyeOffset};
pub use driver::{AnimatorHandle, AssistantAnimator};
pub use phase::{AssistantInputs, Expression, Phase, PhaseProfile};
