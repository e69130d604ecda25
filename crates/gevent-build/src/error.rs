//! Error types for gevent-build.

use thiserror::Error;

/// Result type for gevent-build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Errors that can occur while resolving the plugin build configuration.
#[derive(Error, Debug)]
pub enum BuildError {
    /// An external command could not be run or exited with a non-zero status.
    #[error("Command {command} returned non-zero")]
    CommandFailed { command: String },

    /// An external command succeeded but printed something unusable.
    #[error("Unexpected output from {command}: {reason}")]
    InvalidOutput { command: String, reason: String },

    /// Failed to read the resolver config file.
    #[error("Failed to read config file: {0}")]
    ReadConfig(#[from] std::io::Error),

    /// Failed to parse the resolver config file.
    #[error("Failed to parse TOML config: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// Failed to render a config as TOML.
    #[error("Failed to serialize TOML: {0}")]
    SerializeToml(#[from] toml::ser::Error),

    /// Failed to render a config as JSON.
    #[error("Failed to serialize JSON: {0}")]
    SerializeJson(#[from] serde_json::Error),
}

impl BuildError {
    /// Returns true for [`BuildError::CommandFailed`].
    pub fn is_command_failure(&self) -> bool {
        matches!(self, BuildError::CommandFailed { .. })
    }
}
