//! Game launch orchestration.
//!
//! `LaunchOrchestrator` serializes all communication with the Game Control
//! Service: game launches (with the decoy sequence), the backend-confirmed
//! police-mode toggle, and teardown. `TriggerPort` is the single slot the
//! external posture detector fires through.

pub mod config;
pub mod orchestrator;
pub mod state;
pub mod trigger;

pub use config::LaunchConfig;
pub use orchestrator::{ActionOutcome, LaunchOrchestrator};
pub use state::LaunchState;
pub use trigger::{TriggerFn, TriggerOutcome, TriggerPort};
