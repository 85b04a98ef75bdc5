use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Game Hub: launch games, toggle posture police mode, and watch the assistant.
#[derive(Parser, Debug)]
#[command(name = "gamehub", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level or filter directive (e.g. debug, gamehub_launcher=trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Game control service URL, overriding the config file.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Listen for posture detector reports on this address.
    #[arg(long)]
    pub detector_addr: Option<SocketAddr>,

    /// Run without the animated assistant.
    #[arg(long)]
    pub no_assistant: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
