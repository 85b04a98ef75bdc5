use gamehub_common::GameId;

/// The orchestrator's authoritative state for one UI session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LaunchState {
    /// Game awaiting a launch acknowledgment.
    pub loading_game: Option<GameId>,
    /// Last game a launch was attempted for. Set before the request resolves.
    pub active_game: Option<GameId>,
    /// Last police-mode value the backend acknowledged.
    pub police_mode_enabled: bool,
    /// The decoy sequence is playing; no real launch of the decoy game yet.
    pub decoy_in_progress: bool,
}

impl LaunchState {
    /// Launch controls should be disabled while this is true.
    pub fn is_busy(&self) -> bool {
        self.loading_game.is_some() || self.decoy_in_progress
    }
}
