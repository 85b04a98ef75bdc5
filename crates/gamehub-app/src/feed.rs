//! Derives the assistant's inputs from launcher state and the hovered game.

use gamehub_assistant::AssistantInputs;
use gamehub_common::GameId;
use gamehub_launcher::LaunchState;
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub fn inputs(state: &LaunchState, hovered: Option<GameId>) -> AssistantInputs {
    AssistantInputs {
        hovered_game: hovered,
        loading_game: state.loading_game,
        active_game: state.active_game,
    }
}

/// Follow both sources until either closes. Unchanged inputs are not
/// re-sent, so the animator only re-arms on real changes.
pub fn spawn(
    mut state: watch::Receiver<LaunchState>,
    mut hover: watch::Receiver<Option<GameId>>,
) -> (watch::Receiver<AssistantInputs>, JoinHandle<()>) {
    let initial = inputs(&state.borrow_and_update(), *hover.borrow_and_update());
    let (tx, rx) = watch::channel(initial);
    let task = tokio::spawn(async move {
        loop {
            tokio::select! {
                r = state.changed() => if r.is_err() { break },
                r = hover.changed() => if r.is_err() { break },
            }
            let next = inputs(&state.borrow_and_update(), *hover.borrow_and_update());
            tx.send_if_modified(|current| {
                if *current == next {
                    return false;
                }
                *current = next;
                true
            });
        }
    });
    (rx, task)
}
