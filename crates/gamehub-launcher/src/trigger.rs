//! Single-slot entry point for the external posture detector.
//!
//! The composition root owns one `TriggerPort` and hands clones to the
//! orchestrator (which publishes into it) and to whatever adapter fronts the
//! detector (which fires it). Each publish replaces the previous callback.

use std::fmt;
use std::sync::{Arc, RwLock};

use gamehub_common::GameId;

/// Zero-argument callback the detector invokes on bad posture.
pub type TriggerFn = Arc<dyn Fn() -> TriggerOutcome + Send + Sync>;

/// What a detector firing amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Nothing is published in the slot.
    Unregistered,
    /// Police mode is off.
    Ignored,
    /// A launch of this game was requested.
    Launched(GameId),
}

impl fmt::Display for TriggerOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriggerOutcome::Unregistered => write!(f, "unregistered"),
            TriggerOutcome::Ignored => write!(f, "ignored"),
            TriggerOutcome::Launched(game) => write!(f, "launched {game}"),
        }
    }
}

#[derive(Default)]
struct Registration {
    callback: Option<TriggerFn>,
    generation: u64,
}

#[derive(Clone, Default)]
pub struct TriggerPort {
    slot: Arc<RwLock<Registration>>,
}

impl TriggerPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the published callback. Returns the new generation.
    pub fn publish(&self, callback: TriggerFn) -> u64 {
        let mut slot = self.slot.write().unwrap_or_else(|p| p.into_inner());
        slot.callback = Some(callback);
        slot.generation += 1;
        slot.generation
    }

    /// Empty the slot; later fires report `Unregistered`.
    pub fn clear(&self) {
        let mut slot = self.slot.write().unwrap_or_else(|p| p.into_inner());
        slot.callback = None;
        slot.generation += 1;
    }

    /// Number of publishes and clears so far.
    pub fn generation(&self) -> u64 {
        self.slot.read().unwrap_or_else(|p| p.into_inner()).generation
    }

    pub fn is_registered(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .callback
            .is_some()
    }

    /// Invoke the latest published callback.
    pub fn fire(&self) -> TriggerOutcome {
        // Clone out so the callback runs without the lock held.
        let callback = self
            .slot
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .callback
            .clone();
        match callback {
            Some(callback) => callback(),
            None => TriggerOutcome::Unregistered,
        }
    }
}

impl fmt::Debug for TriggerPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerPort")
            .field("registered", &self.is_registered())
            .field("generation", &self.generation())
            .finish()
    }
}
