//! Toast texts.

use gamehub_common::{LaunchTrigger, Notification};

pub(crate) const DECOY_TITLE: &str = "GET RICKROLLED!";
pub(crate) const LAUNCHED_TITLE: &str = "Game Launched!";
pub(crate) const AUTOMATED_TITLE: &str = "POLICE MODE ACTIVATED!";

pub(crate) fn decoy() -> Notification {
    Notification::info(
        DECOY_TITLE,
        "Never gonna give you up, never gonna let you down!",
    )
}

pub(crate) fn launched(trigger: LaunchTrigger, game_name: &str) -> Notification {
    match trigger {
        LaunchTrigger::Automated => Notification::warning(
            AUTOMATED_TITLE,
            format!("Bad posture detected! Time to fix it with {game_name}!"),
        ),
        LaunchTrigger::Manual => {
            Notification::info(LAUNCHED_TITLE, format!("{game_name} is starting..."))
        }
    }
}

pub(crate) fn launch_failed(service: &str) -> Notification {
    Notification::error(
        "Error",
        format!("Failed to launch game. Make sure the backend is running at {service}."),
    )
}

pub(crate) fn police_mode(enabled: bool) -> Notification {
    if enabled {
        Notification::info("Police Mode ON", "Camera & posture monitoring active!")
    } else {
        Notification::info("Police Mode OFF", "Monitoring disabled.")
    }
}

pub(crate) fn connection_error(service: &str) -> Notification {
    Notification::error(
        "Connection Error",
        format!("Could not reach backend at {service}."),
    )
}

pub(crate) fn closed() -> Notification {
    Notification::info("All Closed", "Games and monitoring stopped.")
}

pub(crate) fn close_failed() -> Notification {
    Notification::error("Error", "Failed to close games.")
}
