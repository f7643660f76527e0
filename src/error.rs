use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidEnv {
        key: String,
        value: String,
        reason: String,
    },
    #[error("a deck needs at least one scene")]
    NoScenes,
    #[error("scene duration must be greater than zero")]
    ZeroDuration,
}
