mod cli;
mod console;
mod detector;
mod display;
mod feed;
mod logging;

use std::sync::{Arc, Mutex};

use gamehub_assistant::{AssistantAnimator, AssistantTiming};
use gamehub_common::{GameHubError, NotificationQueue, Result};
use gamehub_config::GameHubConfig;
use gamehub_control::HttpGameControl;
use gamehub_launcher::{LaunchConfig, LaunchOrchestrator, TriggerPort};
use tokio::io::BufReader;
use tokio::net::TcpListener;
use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;

use crate::console::Console;

fn load_config(args: &cli::Args) -> Result<GameHubConfig> {
    let config = match &args.config {
        Some(path) => gamehub_config::load_config_from(path)?,
        None => gamehub_config::load_config()?,
    };
    Ok(config)
}

#[tokio::main]
async fn main() {
    let args = cli::parse();

    // Logging needs the config's level, so load first and report afterwards.
    let loaded = load_config(&args);
    let config_level = loaded
        .as_ref()
        .map(|c| c.logging.level)
        .unwrap_or_default();
    logging::init(args.log_level.as_deref(), config_level);

    tracing::info!("Game Hub v{} starting...", env!("CARGO_PKG_VERSION"));
    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config load failed, using defaults");
        GameHubConfig::default()
    });
    if let Some(url) = &args.base_url {
        tracing::info!(base_url = %url, "using base URL override");
        config.service.base_url = url.clone();
    }
    tracing::debug!(config = %gamehub_config::config_to_json(&config), "effective config");

    if let Err(e) = run(args, config).await {
        tracing::error!(error = %e, "gamehub exited with an error");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}

async fn run(args: cli::Args, config: GameHubConfig) -> Result<()> {
    let control = HttpGameControl::from_config(&config.service)
        .map_err(|e| GameHubError::Network(e.to_string()))?;
    tracing::info!(base_url = control.base_url(), "game control client ready");

    let (toast_tx, toast_rx) = mpsc::unbounded_channel();
    let board = Arc::new(Mutex::new(NotificationQueue::default()));
    tokio::spawn(display::print_notifications(toast_rx, Arc::clone(&board)));

    let trigger = TriggerPort::new();
    let orchestrator = LaunchOrchestrator::new(
        LaunchConfig::from_config(&config),
        Arc::new(control),
        Arc::new(toast_tx),
        trigger.clone(),
    );
    orchestrator.check_backend().await;

    let stop = CancellationToken::new();
    if let Some(addr) = args.detector_addr {
        let listener = TcpListener::bind(addr).await?;
        tokio::spawn(detector::serve(listener, trigger.clone(), stop.clone()));
    }

    let (hover_tx, hover_rx) = watch::channel(None);
    let assistant = if args.no_assistant {
        tracing::info!("assistant disabled");
        None
    } else {
        let (inputs, _feed) = feed::spawn(orchestrator.subscribe(), hover_rx);
        let handle =
            AssistantAnimator::spawn(AssistantTiming::from_config(&config.assistant), inputs);
        tokio::spawn(display::print_speech(handle.frames()));
        Some(handle)
    };

    let console = Console::new(orchestrator.clone(), trigger, hover_tx, board);
    tokio::select! {
        r = console.run(BufReader::new(tokio::io::stdin())) => r?,
        _ = tokio::signal::ctrl_c() => tracing::info!("interrupted"),
    }

    orchestrator.shutdown();
    stop.cancel();
    if let Some(handle) = assistant {
        handle.stop().await;
    }
    Ok(())
}
