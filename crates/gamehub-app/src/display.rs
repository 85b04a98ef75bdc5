//! Console rendering of toasts, launcher state and assistant speech.

use gamehub_assistant::AnimationFrame;
use std::sync::{Arc, Mutex};

use gamehub_common::{Notification, NotificationLevel, NotificationQueue, NotificationSink};
use gamehub_launcher::{LaunchConfig, LaunchState};
use tokio::sync::{mpsc, watch};

pub fn notification(n: &Notification) -> String {
    let tag = match n.level {
        NotificationLevel::Info => "info",
        NotificationLevel::Warning => "WARN",
        NotificationLevel::Error => "ERROR",
    };
    format!("[{tag}] {}: {}", n.title, n.body)
}

pub fn state(state: &LaunchState, config: &LaunchConfig) -> String {
    let game = |g: Option<gamehub_common::GameId>| match g {
        Some(id) => config.game_name(id),
        None => "-".to_string(),
    };
    format!(
        "loading: {}, active: {}, police mode: {}, decoy: {}",
        game(state.loading_game),
        game(state.active_game),
        if state.police_mode_enabled { "on" } else { "off" },
        if state.decoy_in_progress { "playing" } else { "-" },
    )
}

pub fn speech(frame: &AnimationFrame) -> String {
    format!("SillyTilter ({:?}): {}", frame.expression, frame.message)
}

/// Print each toast as it arrives and keep it on the board until it expires.
pub async fn print_notifications(
    mut rx: mpsc::UnboundedReceiver<Notification>,
    board: Arc<Mutex<NotificationQueue>>,
) {
    while let Some(n) = rx.recv().await {
        println!("{}", notification(&n));
        board.notify(n);
    }
}

/// Print each new assistant line once.
pub async fn print_speech(mut frames: watch::Receiver<AnimationFrame>) {
    let mut last = frames.borrow_and_update().message;
    println!("{}", speech(&frames.borrow()));
    while frames.changed().await.is_ok() {
        let frame = frames.borrow_and_update().clone();
        if frame.message != last {
            last = frame.message;
            println!("{}", speech(&frame));
        }
    }
}
