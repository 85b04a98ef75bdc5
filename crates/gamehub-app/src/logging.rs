use gamehub_config::schema::LogLevel;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "gamehub=info";

/// CLI flag, then `RUST_LOG`, then the config file. A bare level name is
/// scoped to the workspace crates.
pub fn directive(cli: Option<&str>, env: Option<&str>, config: LogLevel) -> String {
    if let Some(cli) = cli.map(str::trim).filter(|s| !s.is_empty()) {
        return scope(cli);
    }
    if let Some(env) = env.map(str::trim).filter(|s| !s.is_empty()) {
        return env.to_string();
    }
    config.directive()
}

fn scope(value: &str) -> String {
    match value.to_ascii_lowercase().as_str() {
        level @ ("trace" | "debug" | "info" | "warn" | "error") => format!("gamehub={level}"),
        _ => value.to_string(),
    }
}

pub fn init(cli: Option<&str>, config: LogLevel) {
    let env = std::env::var("RUST_LOG").ok();
    let directive = directive(cli, env.as_deref(), config);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("invalid log filter {directive:?} ({e}), using {DEFAULT_DIRECTIVE}");
        EnvFilter::new(DEFAULT_DIRECTIVE)
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
