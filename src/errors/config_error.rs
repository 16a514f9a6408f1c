use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating the server configuration.
///
/// All of these are fatal: the server refuses to start rather than run with a
/// placeholder credential or an unreachable destination.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Missing required configuration value: {0}")]
    Missing(&'static str),

    #[error("Configuration value {0} still contains a placeholder: {1}")]
    Placeholder(&'static str, String),

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
