use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum GameHubError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("network error: {0}")]
    Network(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("launcher.games is empty".into());
        assert_eq!(
            err.to_string(),
            "config validation error: launcher.games is empty"
        );
    }

    #[test]
    fn gamehub_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: GameHubError = config_err.into();
        assert!(matches!(err, GameHubError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn gamehub_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
        let err: GameHubError = io_err.into();
        assert!(matches!(err, GameHubError::Io(_)));
        assert!(err.to_string().contains("port taken"));
    }

    #[test]
    fn gamehub_error_network_display() {
        let err = GameHubError::Network("connection refused".into());
        assert_eq!(err.to_string(), "network error: connection refused");
    }
}
