//! Stdin command front end standing in for the launcher UI.

use std::future::Future;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use gamehub_common::{GameId, LaunchTrigger, NotificationQueue};
use gamehub_launcher::{ActionOutcome, LaunchOrchestrator, TriggerPort};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::watch;
use tracing::debug;

use crate::display;

pub const HELP: &str =
    "commands: play <id> | hover <id> | unhover | police [on|off] | close | posture | status | help | quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(GameId),
    Hover(GameId),
    Unhover,
    Police(bool),
    TogglePolice,
    Close,
    Posture,
    Status,
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command {0:?}")]
    Unknown(String),
    #[error("{0} needs an argument")]
    MissingArgument(&'static str),
    #[error("not a game id: {0:?}")]
    InvalidGame(String),
    #[error("police mode is on or off, not {0:?}")]
    InvalidMode(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?.to_ascii_lowercase();
        let arg = words.next();
        let game = |name: &'static str| -> Result<GameId, CommandError> {
            let raw = arg.ok_or(CommandError::MissingArgument(name))?;
            raw.parse::<u8>()
                .map(GameId)
                .map_err(|_| CommandError::InvalidGame(raw.to_string()))
        };
        match verb.as_str() {
            "play" => Ok(Command::Play(game("play")?)),
            "hover" => Ok(Command::Hover(game("hover")?)),
            "unhover" => Ok(Command::Unhover),
            "police" => match arg.map(str::to_ascii_lowercase).as_deref() {
                Some("on") => Ok(Command::Police(true)),
                Some("off") => Ok(Command::Police(false)),
                Some(other) => Err(CommandError::InvalidMode(other.to_string())),
                None => Ok(Command::TogglePolice),
            },
            "close" => Ok(Command::Close),
            "posture" => Ok(Command::Posture),
            "status" => Ok(Command::Status),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(verb)),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Silent,
    Quit,
}

pub struct Console {
    orchestrator: LaunchOrchestrator,
    trigger: TriggerPort,
    hover: watch::Sender<Option<GameId>>,
    toasts: Arc<Mutex<NotificationQueue>>,
}

impl Console {
    pub fn new(
        orchestrator: LaunchOrchestrator,
        trigger: TriggerPort,
        hover: watch::Sender<Option<GameId>>,
        toasts: Arc<Mutex<NotificationQueue>>,
    ) -> Self {
        Self {
            orchestrator,
            trigger,
            hover,
            toasts,
        }
    }

    pub async fn run<R: AsyncBufRead + Unpin>(&self, input: R) -> std::io::Result<()> {
        println!("{HELP}");
        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let reply = match line.parse::<Command>() {
                Ok(command) => self.execute(command).await,
                Err(e) => Reply::Text(format!("{e}; try `help`")),
            };
            match reply {
                Reply::Text(text) => println!("{text}"),
                Reply::Silent => {}
                Reply::Quit => break,
            }
        }
        Ok(())
    }

    pub async fn execute(&self, command: Command) -> Reply {
        match command {
            Command::Play(game) => self.play(game),
            Command::Hover(game) => {
                self.hover.send_replace(Some(game));
                Reply::Silent
            }
            Command::Unhover => {
                self.hover.send_replace(None);
                Reply::Silent
            }
            Command::Police(enabled) => {
                let orchestrator = self.orchestrator.clone();
                self.spawn_action("police", async move {
                    orchestrator.set_police_mode(enabled).await
                })
            }
            Command::TogglePolice => {
                let orchestrator = self.orchestrator.clone();
                self.spawn_action("police toggle", async move {
                    orchestrator.toggle_police_mode().await
                })
            }
            Command::Close => {
                let orchestrator = self.orchestrator.clone();
                self.spawn_action("close", async move { orchestrator.close_all().await })
            }
            Command::Posture => Reply::Text(format!("posture trigger: {}", self.trigger.fire())),
            Command::Status => Reply::Text(self.status()),
            Command::Help => Reply::Text(HELP.to_string()),
            Command::Quit => Reply::Quit,
        }
    }

    fn play(&self, game: GameId) -> Reply {
        if !self.orchestrator.config().game_ids.contains(&game) {
            return Reply::Text(format!("no such game: {game}"));
        }
        if self.orchestrator.state().is_busy() {
            return Reply::Text("a launch is already in progress".to_string());
        }
        let handle = self.orchestrator.request_launch(game, LaunchTrigger::Manual);
        tokio::spawn(async move {
            if let Ok(outcome) = handle.await {
                debug!(game = %game, ?outcome, "console launch finished");
            }
        });
        Reply::Silent
    }

    /// Run a backend action without holding up the prompt. Its toast
    /// reports how it went.
    fn spawn_action<F>(&self, name: &'static str, action: F) -> Reply
    where
        F: Future<Output = ActionOutcome> + Send + 'static,
    {
        if self.orchestrator.is_shut_down() {
            return Reply::Text("shutting down".to_string());
        }
        tokio::spawn(async move {
            let outcome = action.await;
            debug!(action = name, ?outcome, "console action finished");
        });
        Reply::Silent
    }

    /// State line followed by the toasts still on screen.
    fn status(&self) -> String {
        let mut lines = vec![display::state(&self.orchestrator.state(), self.orchestrator.config())];
        let mut toasts = self.toasts.lock().unwrap_or_else(|p| p.into_inner());
        lines.extend(toasts.visible().into_iter().map(display::notification));
        lines.join("\n")
    }
}
